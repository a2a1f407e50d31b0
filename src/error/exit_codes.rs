use crate::error::JdkPinError;

pub fn get_exit_code(error: &JdkPinError) -> i32 {
    match error.root() {
        JdkPinError::StaleManifest(_) => 1,

        JdkPinError::Lookup { .. } | JdkPinError::Parse(_) | JdkPinError::Config(_) => 2,

        JdkPinError::Load { .. } | JdkPinError::Yaml(_) => 3,

        JdkPinError::Write { .. } => 4,

        JdkPinError::Fetch { .. } | JdkPinError::Http(_) => 20,

        JdkPinError::MalformedResponse { .. } | JdkPinError::Json(_) => 21,

        _ => 1,
    }
}
