#![no_main]

use libfuzzer_sys::fuzz_target;

use linemark::{markdown_to_html, markdown_to_pretty_html, Options};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut options = Options::default();
        markdown_to_html(s, &options);

        options.render.fragment = true;
        options.render.underline_block = false;
        options.parse.max_inline_depth = 4;
        markdown_to_pretty_html(s, &options);
    }
});
