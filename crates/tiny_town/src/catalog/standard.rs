//! The standard building set and deck selection.
use crate::catalog::{BuildingDef, Category, Effect, Registry, COTTAGE};
use crate::error::{Error, Result};
use crate::feeding::{AdjacentFeeding, GlobalFeeding, GroupFeeding, LineFeeding};
use crate::grid::BuildingId;
use crate::scoring::{
    AdjacentAny, AdjacentCategory, AdjacentCount, AvoidCategory, CenterCount, Corners,
    FedCottages, FedNeighbors, FinishingRank, Fixed, GlobalUnique, Isolation, LargestGroup,
    LineCount, LineUnique, MissingTypes, OddEvenSet, SavedScore, SetTable, UnfedCottages,
};

/// Shrine score by number of buildings already on the board.
const SHRINE_TABLE: [i32; 6] = [1, 2, 3, 4, 5, 8];

/// Every building of the standard set, cottage first and monuments last.
pub fn standard() -> Result<Vec<BuildingDef>> {
    use Category::*;

    Ok(vec![
        BuildingDef::parse("Cottage", Blue, "_ wheat / brick glass")?
            .with_feed_cost(1)
            .with_cottages(1)
            .with_scorer(Fixed::when_fed(3)),
        // Feeders.
        BuildingDef::parse("Farm", Red, "wheat wheat / wood wood")?
            .with_feeder(GlobalFeeding::new(4)),
        BuildingDef::parse("Granary", Red, "wheat wheat / wood brick")?
            .with_feeder(AdjacentFeeding),
        BuildingDef::parse("Greenhouse", Red, "wheat glass / wood wood")?
            .with_feeder(GroupFeeding),
        BuildingDef::parse("Orchard", Red, "stone wheat / wheat wood")?
            .with_feeder(LineFeeding),
        BuildingDef::parse("Well", Gray, "wood stone")?
            .with_scorer(AdjacentCount::new([COTTAGE], 1)),
        BuildingDef::parse("Fountain", Gray, "wood stone")?
            .with_scorer(AdjacentAny::new(["fountain"], 2)),
        BuildingDef::parse("Millstone", Gray, "wood stone")?
            .with_scorer(AdjacentCategory::new([Red, Yellow], 2)),
        BuildingDef::parse("Shed", Gray, "wood stone")?.with_scorer(Fixed::new(1)),
        BuildingDef::parse("Chapel", Orange, "_ _ glass / stone glass stone")?
            .with_scorer(FedCottages::new(1)),
        BuildingDef::parse("Abbey", Orange, "_ _ glass / brick stone stone")?
            .with_scorer(AvoidCategory::new([Black], 3)),
        BuildingDef::parse("Cloister", Orange, "_ _ glass / wood brick stone")?
            .with_scorer(Corners::new(1)),
        BuildingDef::parse("Temple", Orange, "_ _ glass / brick brick stone")?
            .with_scorer(FedNeighbors::new(2, 4)),
        BuildingDef::parse("Tavern", Green, "brick brick glass")?.with_scorer(SetTable::default()),
        BuildingDef::parse("Almshouse", Green, "stone stone glass")?.with_scorer(OddEvenSet),
        BuildingDef::parse("Feast Hall", Green, "wood wood glass")?.with_scorer(Fixed::new(2)),
        BuildingDef::parse("Inn", Green, "wheat stone glass")?.with_scorer(Isolation::new(3)),
        BuildingDef::parse("Theater", Yellow, "_ stone _ / wood glass wood")?
            .with_scorer(LineUnique),
        BuildingDef::parse("Bakery", Yellow, "_ wheat _ / brick glass brick")?
            .with_scorer(AdjacentCategory::new([Red, Black], 3)),
        BuildingDef::parse("Market", Yellow, "_ stone _ / stone glass stone")?
            .with_scorer(LineCount::new(1)),
        BuildingDef::parse("Tailor", Yellow, "_ wheat _ / stone glass stone")?
            .with_scorer(CenterCount),
        BuildingDef::parse("Factory", Black, "wood _ _ _ / brick stone stone brick")?
            .with_effect(Effect::StoreResource),
        BuildingDef::parse("Bank", Black, "wheat wheat _ / wood glass brick")?
            .with_scorer(Fixed::new(4))
            .with_effect(Effect::StoreResource),
        BuildingDef::parse("Trading Post", Black, "stone wood _ / stone wood brick")?
            .with_scorer(Fixed::new(1))
            .with_effect(Effect::ResourceWildcard),
        BuildingDef::parse("Warehouse", Black, "wheat wood wheat / brick _ brick")?
            .with_effect(Effect::Storage { capacity: 3 }),
        // Monuments.
        BuildingDef::parse("Cathedral of Caterina", Monument, "wheat _ / stone glass")?
            .with_scorer(Fixed::new(2))
            .with_effect(Effect::WaiveEmptyPenalty),
        BuildingDef::parse("Barrett Castle", Monument, "wheat _ _ wood / stone wood glass brick")?
            .with_feed_cost(1)
            .counting_as(COTTAGE)
            .with_cottages(2)
            .with_scorer(Fixed::when_fed(5)),
        BuildingDef::parse("Silva Forum", Monument, "_ brick _ / wheat wood stone / _ brick _")?
            .with_scorer(LargestGroup),
        BuildingDef::parse("The Sky Baths", Monument, "_ brick _ / stone glass stone / wheat _ wood")?
            .with_scorer(MissingTypes::deck(2)),
        BuildingDef::parse("Grand Mausoleum of the Rodina", Monument, "wheat _ / stone stone / glass _")?
            .with_scorer(UnfedCottages::new(3)),
        BuildingDef::parse("Shrine of the Elder Tree", Monument, "_ brick _ / wheat stone glass")?
            .with_scorer(SavedScore)
            .with_effect(Effect::FreezeScore {
                table: SHRINE_TABLE.to_vec(),
            }),
        BuildingDef::parse("Starloom Assembly", Monument, "glass wheat / brick stone")?
            .with_scorer(FinishingRank::default()),
        BuildingDef::parse("Mandras Palace", Monument, "wheat brick / glass wood")?
            .with_scorer(GlobalUnique),
        BuildingDef::parse("Fort Ironweed", Monument, "wheat _ brick / stone wood stone")?
            .with_scorer(Fixed::new(7)),
    ])
}

/// Builds a registry from the named standard buildings, in the given order.
///
/// Names are matched case-insensitively. The deck is checked for a single monument,
/// which only warns.
pub fn deck(names: &[&str]) -> Result<Registry> {
    let mut all = standard()?;
    let mut picked = Vec::with_capacity(names.len());
    for name in names {
        let id = BuildingId::new(name);
        let index = all
            .iter()
            .position(|d| d.id() == &id)
            .ok_or_else(|| Error::UnknownBuilding((*name).to_owned()))?;
        picked.push(all.swap_remove(index));
    }
    let registry = Registry::new(picked)?;
    registry.check_deck();
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_set_is_well_formed() {
        let defs = standard().unwrap();
        let registry = Registry::new(defs).unwrap();
        assert_eq!(registry.len(), 34);
        assert_eq!(registry.iter().filter(|d| d.is_monument()).count(), 9);
        assert!(!registry.check_deck());
        assert!(registry.iter().all(|d| !d.variants().is_empty()));
    }

    #[test]
    fn castle_is_cottage_class_worth_two() {
        let registry = Registry::new(standard().unwrap()).unwrap();
        let castle = registry.get_by_name("barrett castle").unwrap();
        assert!(castle.is_cottage_class());
        assert_eq!(castle.cottage_weight(), 2);
        assert!(registry.is_cottage_class(&BuildingId::new(COTTAGE)));
    }

    #[test]
    fn deck_picks_named_buildings_in_order() {
        let registry = deck(&["Well", "cottage", "FORT IRONWEED"]).unwrap();
        let names: Vec<&str> = registry.iter().map(BuildingDef::name).collect();
        assert_eq!(names, ["Well", "Cottage", "Fort Ironweed"]);
        assert!(registry.check_deck());
    }

    #[test]
    fn deck_rejects_unknown_and_repeated_names() {
        assert_eq!(
            deck(&["Cottage", "Castle Dracula"]).unwrap_err(),
            Error::UnknownBuilding("Castle Dracula".into())
        );
        assert!(matches!(
            deck(&["Cottage", "cottage"]),
            Err(Error::UnknownBuilding(_))
        ));
    }
}
