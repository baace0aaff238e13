use crate::environment::Environment;

/// Lowercased user-agent fragments that identify a mobile platform.
const MOBILE_MARKERS: [&str; 8] = [
    "android",
    "blackberry",
    "iphone",
    "ipad",
    "ipod",
    "opera mini",
    "iemobile",
    "wpdesktop",
];

/// Case-insensitive check of a user agent against known mobile platforms.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let user_agent = user_agent.to_ascii_lowercase();
    MOBILE_MARKERS
        .iter()
        .any(|marker| user_agent.contains(marker))
}

/// Classifies the client once, at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceClassifier {
    is_mobile: bool,
}

impl DeviceClassifier {
    pub fn new(env: &Environment) -> Self {
        let is_mobile = is_mobile_user_agent(&env.user_agent());
        tracing::debug!(is_mobile, "classified device");
        Self { is_mobile }
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }
}
