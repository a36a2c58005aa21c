use std::path::PathBuf;

pub fn get_path(dir: &str, file: &str) -> PathBuf {
    [dir, "migration", "postgresql", file].iter().collect()
}
