use chrono::NaiveTime;
use restaurant_menu::utils::validation::Validate;
use restaurant_menu::{FixedClock, RestaurantError, RestaurantsConfig};
use std::io::Write;
use tempfile::NamedTempFile;

const CONFIG: &str = r#"
[[restaurants]]
name = "Amelie's cafe"
location = "Chennai"
opening_time = "10:30"
closing_time = "22:00"

[[restaurants.menu]]
name = "Sweet corn soup"
price = 119

[[restaurants.menu]]
name = "Vegetable lasagne"
price = 269

[[restaurants]]
name = "Early bakery"
location = "Pune"
opening_time = "06:00:00"
closing_time = "11:00:00"

[[restaurants.menu]]
name = "Croissant"
price = 99
"#;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_config_from_file() {
    let file = write_config(CONFIG);

    let config = RestaurantsConfig::from_file(file.path()).unwrap();
    config.validate().unwrap();
    assert_eq!(config.restaurants.len(), 2);
    assert_eq!(config.restaurants[0].location, "Chennai");

    let clock = FixedClock(NaiveTime::from_hms_opt(12, 30, 0).unwrap());
    let directory = config.build_directory(clock).unwrap();

    let cafe = directory.find_restaurant_by_name("Amelie's cafe").unwrap();
    assert!(cafe.is_open());
    assert_eq!(
        cafe.calculate_total_order_cost(&["Sweet corn soup", "Vegetable lasagne"])
            .unwrap(),
        388
    );

    let bakery = directory.find_restaurant_by_name("Early bakery").unwrap();
    assert!(!bakery.is_open());
}

// Reads a variable cargo exports to test processes; tests never write the environment.
#[test]
fn test_env_placeholders_are_substituted() {
    let config = RestaurantsConfig::from_toml_str(
        r#"
[[restaurants]]
name = "Amelie's cafe"
location = "${CARGO_PKG_NAME}"
opening_time = "10:30"
closing_time = "22:00"
"#,
    )
    .unwrap();

    let expected =
        std::env::var("CARGO_PKG_NAME").unwrap_or_else(|_| "${CARGO_PKG_NAME}".to_string());
    assert_eq!(config.restaurants[0].location, expected);
}

#[test]
fn test_missing_file_is_io_error() {
    let result = RestaurantsConfig::from_file("/nonexistent/restaurants.toml");
    assert!(matches!(result, Err(RestaurantError::IoError(_))));
}

#[test]
fn test_duplicate_restaurant_names_rejected() {
    let file = write_config(
        r#"
[[restaurants]]
name = "Twin"
location = "A"
opening_time = "08:00"
closing_time = "20:00"

[[restaurants]]
name = "Twin"
location = "B"
opening_time = "09:00"
closing_time = "21:00"
"#,
    );

    let config = RestaurantsConfig::from_file(file.path()).unwrap();
    match config.validate() {
        Err(RestaurantError::InvalidConfigValueError { field, value, .. }) => {
            assert_eq!(field, "restaurants.name");
            assert_eq!(value, "Twin");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_bad_time_rejected_by_validation_and_build() {
    let file = write_config(
        r#"
[[restaurants]]
name = "Sloppy"
location = "Chennai"
opening_time = "ten thirty"
closing_time = "22:00"
"#,
    );

    let config = RestaurantsConfig::from_file(file.path()).unwrap();
    assert!(config.validate().is_err());
    let midnight = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
    assert!(config.build_directory(FixedClock(midnight)).is_err());
}

#[test]
fn test_blank_menu_item_rejected() {
    let file = write_config(
        r#"
[[restaurants]]
name = "Amelie's cafe"
location = "Chennai"
opening_time = "10:30"
closing_time = "22:00"

[[restaurants.menu]]
name = "  "
price = 10
"#,
    );

    let config = RestaurantsConfig::from_file(file.path()).unwrap();
    match config.validate() {
        Err(RestaurantError::InvalidConfigValueError { field, .. }) => {
            assert_eq!(field, "restaurants[0].menu[0].name")
        }
        other => panic!("unexpected result: {:?}", other),
    }
}
