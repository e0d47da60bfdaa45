mod loader;
pub mod media;

pub use loader::{
    DEFAULT_EXPORT_FILE, load_setup_from_json, parse_setup, read_setup, setup_to_json,
    write_setup,
};
