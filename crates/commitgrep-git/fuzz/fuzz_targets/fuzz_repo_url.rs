#![no_main]

use commitgrep_git::RepoUrl;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(url) = std::str::from_utf8(data)
        && let Ok(parsed) = RepoUrl::parse(url)
    {
        assert!(!parsed.name().is_empty());
        assert!(!parsed.web_path().contains(':'));
    }
});
