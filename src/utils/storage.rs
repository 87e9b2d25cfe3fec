use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn read_item(key: &str) -> Result<Option<String>, String> {
    let storage = get_local_storage().ok_or("localStorage is not available")?;
    storage.get_item(key)
        .map_err(|_| format!("Error reading '{}' from localStorage", key))
}

pub fn write_item(key: &str, value: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage is not available")?;
    storage.set_item(key, value)
        .map_err(|_| format!("Error writing '{}' to localStorage", key))
}

pub fn remove_item(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage is not available")?;
    storage.remove_item(key)
        .map_err(|_| format!("Error removing '{}' from localStorage", key))
}
