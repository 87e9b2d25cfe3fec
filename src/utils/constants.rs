/// Portal API root, overridable at compile time with `API_BASE_URL`
pub const DEFAULT_API_BASE_URL: &str = "https://skill-test.similater.website/api/v1";

/// localStorage key holding the access token
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "accessToken";

/// Id of the element the app mounts into
pub const APP_ROOT_ID: &str = "app";
