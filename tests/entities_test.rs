//! Parts, storage, cars and the factories that build them

use autoservice::simulation::{
    broken_chance, AutoServiceFactory, Car, CarFactory, Part, PartCatalog, ShopConfig, SimRng,
    Storage, StorageFactory, DEFAULT_PART_NAMES, MAX_PART_PRICE, MIN_PART_PRICE,
};

#[test]
fn test_storage_take_decrements_count() {
    let mut storage = Storage::new(vec![
        Part::new("Engine", 100, true),
        Part::new("Wheel", 60, true),
    ]);
    assert_eq!(storage.parts_count(), 2);

    let part = storage.try_get_part("Wheel").expect("wheel should be in stock");
    assert_eq!(part.name(), "Wheel");
    assert_eq!(storage.parts_count(), 1);

    // Missing names leave storage untouched
    assert!(storage.try_get_part("Gearbox").is_none());
    assert_eq!(storage.parts_count(), 1);
}

#[test]
fn test_storage_removes_last_matching_part() {
    let mut storage = Storage::new(vec![
        Part::new("Engine", 60, true),
        Part::new("Wheel", 55, true),
        Part::new("Engine", 70, true),
    ]);

    let part = storage.try_get_part("Engine").unwrap();
    assert_eq!(part.price(), 70);

    let part = storage.try_get_part("Engine").unwrap();
    assert_eq!(part.price(), 60);
    assert!(storage.try_get_part("Engine").is_none());
    assert_eq!(storage.parts_count(), 1);
}

#[test]
fn test_storage_rejects_broken_parts() {
    let storage = Storage::new(vec![
        Part::new("Engine", 60, false),
        Part::new("Body", 90, true),
    ]);
    assert_eq!(storage.parts_count(), 1);
    assert_eq!(storage.stock_by_name().get("Body"), Some(&1));
    assert_eq!(storage.stock_by_name().get("Engine"), None);
}

#[test]
fn test_empty_storage_lookup() {
    let mut storage = Storage::default();
    assert!(storage.try_get_part("Engine").is_none());
    assert_eq!(storage.parts_count(), 0);
}

#[test]
fn test_car_broken_count_is_recomputed() {
    let mut car = Car::new(vec![
        Part::new("Engine", 100, false),
        Part::new("Wheel", 60, false),
        Part::new("Gearbox", 80, true),
    ]);
    assert_eq!(car.broken_parts_count(), 2);

    car.set_new_part(0, Part::new("Engine", 110, true));
    assert_eq!(car.broken_parts_count(), 1);
    assert_eq!(car.broken_parts(), vec![Part::new("Wheel", 60, false)]);

    // Swapping in a broken part counts it again
    car.set_new_part(2, Part::new("Gearbox", 80, false));
    assert_eq!(car.broken_parts_count(), 2);
}

#[test]
fn test_part_display_shows_status() {
    assert_eq!(Part::new("Engine", 100, false).to_string(), "Engine - BROKEN");
    assert_eq!(Part::new("Wheel", 60, true).to_string(), "Wheel - intact");
}

#[test]
fn test_car_parts_is_a_copy() {
    let car = Car::new(vec![Part::new("Engine", 100, false)]);

    let mut parts = car.parts();
    parts[0] = Part::new("Engine", 100, true);
    parts.push(Part::new("Wheel", 60, true));

    assert_eq!(car.slot_count(), 1);
    assert_eq!(car.broken_parts_count(), 1);
}

#[test]
fn test_catalog_names_are_a_copy() {
    let catalog = PartCatalog::default();
    let mut names = catalog.names();
    names.clear();

    assert_eq!(catalog.names(), DEFAULT_PART_NAMES.to_vec());
    assert_eq!(catalog.len(), 5);
}

#[test]
fn test_catalog_prices_in_range() {
    let catalog = PartCatalog::default();
    let mut rng = SimRng::with_seed(3);

    for _ in 0..200 {
        let part = catalog.create("Engine", false, &mut rng);
        assert!(part.price() >= MIN_PART_PRICE && part.price() < MAX_PART_PRICE);
        assert!(!part.is_intact());

        let spare = catalog.create_random_intact_part(&mut rng);
        assert!(spare.is_intact());
        assert!(DEFAULT_PART_NAMES.contains(&spare.name()));
    }
}

#[test]
fn test_catalog_rejects_bad_input() {
    assert!(PartCatalog::with_price_range(150, 50).is_err());
    assert!(PartCatalog::with_price_range(100, 100).is_err());
    assert!(PartCatalog::new(Vec::new(), 50, 150).is_err());
}

#[test]
fn test_broken_chance_schedule() {
    assert_eq!(broken_chance(0), 100);
    assert_eq!(broken_chance(1), 50);
    assert_eq!(broken_chance(2), 33);
    assert_eq!(broken_chance(3), 25);
    assert_eq!(broken_chance(4), 20);
}

#[test]
fn test_car_factory_first_slot_always_broken() {
    let factory = CarFactory::new(PartCatalog::default());
    let mut rng = SimRng::with_seed(11);

    for _ in 0..100 {
        let car = factory.create(&mut rng);
        let parts = car.parts();
        assert_eq!(parts.len(), DEFAULT_PART_NAMES.len());
        assert!(!parts[0].is_intact());
        assert!(car.broken_parts_count() >= 1);

        for (part, name) in parts.iter().zip(DEFAULT_PART_NAMES) {
            assert_eq!(part.name(), name);
        }
    }
}

#[test]
fn test_car_factory_later_slots_break_less() {
    let factory = CarFactory::new(PartCatalog::default());
    let mut rng = SimRng::with_seed(5);
    let mut broken_per_slot = [0usize; 5];

    for _ in 0..2000 {
        for (index, part) in factory.create(&mut rng).parts().iter().enumerate() {
            if !part.is_intact() {
                broken_per_slot[index] += 1;
            }
        }
    }

    assert_eq!(broken_per_slot[0], 2000);
    assert!(broken_per_slot[1] > broken_per_slot[4]);
    assert!(broken_per_slot[4] > 0);
}

#[test]
fn test_seeded_factories_are_reproducible() {
    let factory = CarFactory::new(PartCatalog::default());
    let mut first = SimRng::with_seed(42);
    let mut second = SimRng::with_seed(42);

    for _ in 0..10 {
        assert_eq!(factory.create(&mut first), factory.create(&mut second));
    }
}

#[test]
fn test_storage_factory_stocks_intact_parts() {
    let factory = StorageFactory::new(PartCatalog::default());
    let mut rng = SimRng::with_seed(9);

    let storage = factory.create(25, &mut rng);
    assert_eq!(storage.parts_count(), 25);
    assert_eq!(storage.stock_by_name().values().sum::<usize>(), 25);
    for name in storage.stock_by_name().keys() {
        assert!(DEFAULT_PART_NAMES.contains(&name.as_str()));
    }
}

#[test]
fn test_service_factory_uses_config() {
    let config = ShopConfig {
        clients_count: 3,
        ..ShopConfig::default()
    };
    let mut rng = SimRng::with_seed(1);

    let factory = AutoServiceFactory::from_config(config.clone()).unwrap();
    assert_eq!(factory.config(), &config);

    let service = factory.create(&mut rng);
    assert_eq!(service.money(), 1000);
    assert_eq!(service.clients_waiting(), 3);
    assert_eq!(service.storage().parts_count(), 25);
    assert!(service.current_car().is_none());

    // The same factory can open another day
    let second = factory.create(&mut rng);
    assert_eq!(second.clients_waiting(), 3);
}

#[test]
fn test_service_factory_rejects_invalid_config() {
    let config = ShopConfig {
        fixed_penalty: -5,
        ..ShopConfig::default()
    };
    assert!(AutoServiceFactory::from_config(config).is_err());

    let config = ShopConfig {
        min_part_price: 150,
        max_part_price: 50,
        ..ShopConfig::default()
    };
    assert!(AutoServiceFactory::from_config(config).is_err());
}
