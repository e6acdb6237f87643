use anyhow::Result;
use serde_json::json;
use skirmish::mons::CreatureData;
use skirmish_data::{
    LocalDataStore,
    MoveData,
    SpeciesData,
};

fn species() -> serde_json::Value {
    json!([
        {
            "name": "Bulbasaur",
            "primary_type": "Grass",
            "secondary_type": "Poison",
            "base_stats": { "hp": 45, "atk": 49, "def": 49, "spa": 65, "spd": 65, "spe": 45 }
        },
        {
            "name": "Charmander",
            "primary_type": "Fire",
            "base_stats": { "hp": 39, "atk": 52, "def": 43, "spa": 60, "spd": 50, "spe": 65 }
        },
        {
            "name": "Squirtle",
            "primary_type": "Water",
            "base_stats": { "hp": 44, "atk": 48, "def": 65, "spa": 50, "spd": 64, "spe": 43 }
        },
        {
            "name": "Pidgey",
            "primary_type": "Normal",
            "secondary_type": "Flying",
            "base_stats": { "hp": 40, "atk": 45, "def": 40, "spa": 35, "spd": 35, "spe": 56 }
        },
        {
            "name": "Gastly",
            "primary_type": "Ghost",
            "secondary_type": "Poison",
            "base_stats": { "hp": 30, "atk": 35, "def": 30, "spa": 100, "spd": 35, "spe": 80 }
        },
        {
            "name": "Dummy",
            "primary_type": "Normal",
            "base_stats": { "hp": 95, "atk": 95, "def": 95, "spa": 95, "spd": 95, "spe": 95 }
        }
    ])
}

fn moves() -> serde_json::Value {
    json!([
        {
            "name": "Tackle",
            "category": "Physical",
            "type": "Normal",
            "base_power": 40,
            "accuracy": 100,
            "pp": 35
        },
        {
            "name": "Quick Attack",
            "category": "Physical",
            "type": "Normal",
            "base_power": 40,
            "accuracy": 100,
            "priority": 1,
            "pp": 30
        },
        {
            "name": "Slash",
            "category": "Physical",
            "type": "Normal",
            "base_power": 70,
            "accuracy": 100,
            "high_crit": true,
            "pp": 20
        },
        {
            "name": "Hyper Strike",
            "category": "Physical",
            "type": "Normal",
            "base_power": 100,
            "accuracy": null,
            "pp": 5
        },
        {
            "name": "Vine Whip",
            "category": "Physical",
            "element": "Grass",
            "power": 45,
            "accuracy": 100,
            "max_pp": 25
        },
        {
            "name": "Ember",
            "category": "Special",
            "type": "Fire",
            "base_power": 40,
            "accuracy": 100,
            "pp": 25
        },
        {
            "name": "Water Gun",
            "category": "Special",
            "type": "Water",
            "base_power": 40,
            "accuracy": 100,
            "pp": 25
        },
        {
            "name": "Sludge",
            "category": "Special",
            "type": "Poison",
            "base_power": 65,
            "accuracy": 70,
            "pp": 20,
            "target_effects": ["PSN"]
        },
        {
            "name": "Giga Drain",
            "category": "Special",
            "type": "Grass",
            "base_power": 75,
            "accuracy": 100,
            "pp": 10,
            "user_effects": ["LIFESTEAL:%:50"]
        },
        {
            "name": "Growl",
            "category": "Status",
            "type": "Normal",
            "accuracy": 100,
            "pp": 40,
            "target_effects": ["P_ATK:-1"]
        },
        {
            "name": "Tail Whip",
            "category": "Status",
            "type": "Normal",
            "accuracy": 100,
            "pp": 30,
            "target_effects": ["P_DEF:-1"]
        },
        {
            "name": "Swords Dance",
            "category": "Status",
            "type": "Normal",
            "pp": 20,
            "user_effects": ["P_ATK:2"]
        },
        {
            "name": "Recover",
            "category": "Status",
            "type": "Normal",
            "pp": 5,
            "user_effects": ["HEAL:%:50"]
        },
        {
            "name": "Splash",
            "category": "Status",
            "type": "Water",
            "pp": 40
        },
        {
            "name": "Mist",
            "category": "Status",
            "type": "Ice",
            "pp": 30,
            "field_effects": ["MIST"]
        },
        {
            "name": "Will-O-Wisp",
            "category": "Status",
            "type": "Fire",
            "accuracy": 85,
            "pp": 15,
            "target_effects": ["BRN"]
        },
        {
            "name": "Toxic",
            "category": "Status",
            "type": "Poison",
            "accuracy": 90,
            "pp": 10,
            "target_effects": ["BPSN"]
        },
        {
            "name": "Thunder Wave",
            "category": "Status",
            "type": "Electric",
            "accuracy": 90,
            "pp": 20,
            "target_effects": ["PAR"]
        },
        {
            "name": "Hypnosis",
            "category": "Status",
            "type": "Psychic",
            "accuracy": 60,
            "pp": 20,
            "target_effects": ["SLP"]
        },
        {
            "name": "Ice Beam",
            "category": "Special",
            "type": "Ice",
            "base_power": 90,
            "accuracy": 100,
            "pp": 10,
            "target_effects": ["FRZ"]
        }
    ])
}

/// Data store holding a small, fixed set of species and moves for tests.
pub fn test_data_store() -> Result<LocalDataStore> {
    let mut data = LocalDataStore::new();
    for species in serde_json::from_value::<Vec<SpeciesData>>(species())? {
        data.add_species(species);
    }
    for move_data in serde_json::from_value::<Vec<MoveData>>(moves())? {
        data.add_move(move_data);
    }
    Ok(data)
}

/// Describes a creature with neutral nature and zeroed IVs and EVs.
pub fn creature_data(name: &str, species: &str, level: u8, moves: &[&str]) -> CreatureData {
    CreatureData {
        name: name.to_owned(),
        species: species.to_owned(),
        level,
        nature: Default::default(),
        ivs: Default::default(),
        evs: Default::default(),
        moves: moves.iter().map(|name| (*name).to_owned()).collect(),
    }
}
