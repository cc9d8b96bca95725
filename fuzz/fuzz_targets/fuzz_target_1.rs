#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate gnss_nmea;

use gnss_nmea::Gnss;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let mut gnss = Gnss::new();
        gnss.parse(text);
        gnss.position_fix();
        gnss.recommended_minimum();
    }
});
