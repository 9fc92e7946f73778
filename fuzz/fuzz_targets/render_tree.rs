#![no_main]
use libfuzzer_sys::fuzz_target;
use tagscope::{render_to_string, Container, Element};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut parts = s.splitn(3, '\0');
        let name = parts.next().unwrap_or("div");
        let key = parts.next().unwrap_or("data_x");
        let text = parts.next().unwrap_or_default();

        let mut element = Element::new(name).attr(key, text).text(text);
        if render_to_string(&mut element).is_ok() {
            let mut parent = Container::new(name);
            parent += element;
            let _ = render_to_string(&mut parent);
        }
    }
});
