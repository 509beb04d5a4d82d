pub fn config_loaded(path: &str) -> String {
    format!("Loaded configuration from {path}")
}

pub const CONFIG_DEFAULTS: &str = "No config file found, using defaults";

pub fn dispatching(intent: &str) -> String {
    format!("Router dispatching intent={intent}")
}

pub fn fetching_coin(url: &str) -> String {
    format!("GET {url}")
}

pub fn coin_fetched(coin: &str, status: u16) -> String {
    format!("Fetched metadata for '{coin}' (HTTP {status})")
}

pub fn fetch_failed(coin: &str, err: &str) -> String {
    format!("Failed to fetch metadata for '{coin}': {err}")
}
