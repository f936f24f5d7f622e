use anyhow::Result;
use clap::Parser;
use std::io;

use autoservice::console::ConsoleOperator;
use autoservice::simulation::{
    AutoServiceFactory, PenaltyPolicy, ShopConfig, SimRng, CLIENTS_COUNT, FIXED_PENALTY,
    MAX_PART_PRICE, MIN_PART_PRICE, REPAIR_SURCHARGE, STARTING_MONEY, STORAGE_SIZE,
};

#[derive(Parser)]
#[command(name = "autoservice")]
#[command(about = "Turn-based auto repair shop simulation")]
struct Cli {
    /// Money on the account when the shop opens
    #[arg(long, default_value_t = STARTING_MONEY, allow_negative_numbers = true)]
    money: i64,

    /// Number of parts stocked in storage
    #[arg(long, default_value_t = STORAGE_SIZE)]
    storage_size: usize,

    /// Number of clients in the queue
    #[arg(long, default_value_t = CLIENTS_COUNT)]
    clients: usize,

    /// Base penalty for refusing a client
    #[arg(long, default_value_t = FIXED_PENALTY)]
    penalty: i64,

    /// Bonus paid on top of the part price for each repair
    #[arg(long, default_value_t = REPAIR_SURCHARGE)]
    repair_surcharge: i64,

    /// Lowest part price (inclusive)
    #[arg(long, default_value_t = MIN_PART_PRICE)]
    min_price: i64,

    /// Highest part price (exclusive)
    #[arg(long, default_value_t = MAX_PART_PRICE)]
    max_price: i64,

    /// Penalty rule when the broken count is a multiple of the starting count
    #[arg(long, value_enum, default_value_t = PenaltyPolicy::Flat)]
    penalty_policy: PenaltyPolicy,

    /// Seed for a reproducible day
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn shop_config(&self) -> ShopConfig {
        ShopConfig {
            starting_money: self.money,
            storage_size: self.storage_size,
            clients_count: self.clients,
            fixed_penalty: self.penalty,
            repair_surcharge: self.repair_surcharge,
            min_part_price: self.min_price,
            max_part_price: self.max_price,
            penalty_policy: self.penalty_policy,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.shop_config();

    let factory = AutoServiceFactory::from_config(config)?;
    let mut rng = SimRng::from_optional_seed(factory.config().seed);
    let mut service = factory.create(&mut rng);

    let stdin = io::stdin();
    let mut operator = ConsoleOperator::new(stdin.lock(), io::stdout());
    service.run(&mut operator)?;

    Ok(())
}
