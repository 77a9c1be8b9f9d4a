//! Bundled artwork and labels.
//!
//! Image handles coming out of the flow resolve to ASCII panels here; the
//! flow itself never sees artwork bytes.

use crate::flow::pages::ImageId;

pub const SKIP_LABEL: &str = "Skip";

pub const APP_NAME: &str = "V I T A L A B";

const LOGO: &str = r#"
      .---.
     /  +  \
    |  + +  |
     \  +  /
      '---'
"#;

const SAMPLE_KIT: &str = r#"
  _   _   _
 | | | | | |
 | | | | | |
 |~| |~| |~|
 |_| |_| |_|
"#;

const RESULT_BELL: &str = r#"
    .-"-.
   /     \
  |       |
  |_______|
    \___/
     (_)
"#;

const HEART_TRACE: &str = r#"
        /\
  _____/  \    _____
       |   \  /
       |    \/
"#;

/// Resolve an opaque image handle to its ASCII panel.
pub fn artwork(image: ImageId) -> &'static str {
    match image {
        ImageId::Logo => LOGO,
        ImageId::SampleKit => SAMPLE_KIT,
        ImageId::ResultBell => RESULT_BELL,
        ImageId::HeartTrace => HEART_TRACE,
    }
}
