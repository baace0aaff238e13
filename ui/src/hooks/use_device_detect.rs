use hooks_core::DeviceClassifier;
use yew::prelude::*;

use crate::environment::detect;

/// Whether the user agent belongs to a mobile device. Decided once per
/// component.
#[hook]
pub fn use_device_detect() -> bool {
    let classifier = use_memo((), |_| DeviceClassifier::new(&detect()));
    classifier.is_mobile()
}
