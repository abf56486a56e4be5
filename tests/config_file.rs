// The shipped example configuration must stay loadable
use liqrange::shared::config::{ConfigLoader, RangeConfig};

#[test]
fn example_config_matches_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.toml");
    let config = ConfigLoader::load_from(path).unwrap();
    assert_eq!(config, RangeConfig::default());
}
