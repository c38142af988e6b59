#![no_main]

use fieldtree_widgets::{display_width, truncate_to_width};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let max_width = usize::from(data[0]);
    let Ok(text) = std::str::from_utf8(&data[1..]) else {
        return;
    };
    if text.len() > 4096 {
        return;
    }

    let clipped = truncate_to_width(text, max_width);
    assert!(display_width(&clipped) <= max_width, "clipped text fits");
    if display_width(text) <= max_width {
        assert_eq!(clipped, text, "fitting text is unchanged");
    }
});
