//! Seed data: a small bakery inventory.

use larder_core::model::{InventoryId, InventoryKind, LinkId, MeasurementUnit};
use larder_driver_memory::{MemoryBackend, StoredLink};
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct Bakery {
    pub flour: InventoryId,
    pub sugar: InventoryId,
    pub butter: InventoryId,
    pub eggs: InventoryId,
    pub milk: InventoryId,

    /// Processed item with a three-ingredient composition
    pub croissant: InventoryId,

    /// Croissant composition: flour, butter, eggs
    pub croissant_links: Vec<LinkId>,
}

impl Bakery {
    /// Raw materials, excluding the croissant itself.
    pub fn raw_materials(&self) -> [InventoryId; 5] {
        [self.flour, self.sugar, self.butter, self.eggs, self.milk]
    }
}

/// Seeds the bakery. Unit costs: flour 0,80/g, sugar 1,20/g, butter 4,50/g,
/// eggs 150/unit, milk 900/l.
pub fn bakery(backend: &MemoryBackend) -> Bakery {
    let raw = |name, unit, cost| backend.insert_item(name, InventoryKind::Raw, unit, cost);

    let flour = raw("Harina 000", MeasurementUnit::Grams, Decimal::new(80, 2));
    let sugar = raw("Azúcar", MeasurementUnit::Grams, Decimal::new(120, 2));
    let butter = raw("Manteca", MeasurementUnit::Grams, Decimal::new(450, 2));
    let eggs = raw("Huevo", MeasurementUnit::Units, Decimal::new(150, 0));
    let milk = raw("Leche", MeasurementUnit::Liters, Decimal::new(900, 0));

    let croissant = backend.insert_item(
        "Medialuna",
        InventoryKind::Processed,
        MeasurementUnit::Units,
        Decimal::new(2400, 0),
    );

    let croissant_links = [
        (flour, Decimal::new(1000, 0), Decimal::new(80, 2)),
        (butter, Decimal::new(250, 0), Decimal::new(450, 2)),
        (eggs, Decimal::new(2, 0), Decimal::new(150, 0)),
    ]
    .into_iter()
    .map(|(ingredient_id, quantity, cost)| {
        backend.insert_link(StoredLink {
            inventory_id: croissant,
            ingredient_id,
            quantity,
            cost,
        })
    })
    .collect();

    Bakery {
        flour,
        sugar,
        butter,
        eggs,
        milk,
        croissant,
        croissant_links,
    }
}
