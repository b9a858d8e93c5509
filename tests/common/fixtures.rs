//! Static access-log corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of representative log lines in
//! the fixed 13-field pipe-delimited layout.

/// The canonical well-formed line from the upstream log format documentation.
pub const EXAMPLE_LINE: &str = "54.36.98.170|read.csdn.net|172.16.100.161:80|-|[07/Oct/2017:19:04:33 +0800]|\"GET / HTTP/1.1\"|302|25737|\"-\"|\"Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/56.0.2924.87 Safari/537.36\"|0.472|\"-\"|\"-\"";

/// Epoch milliseconds for `07/Oct/2017:19:04:33 +0800`.
pub const EXAMPLE_TIME_MS: i64 = 1_507_374_273_000;

/// Well-formed lines exercising different paths, statuses, cookies, and
/// escaped fields.
pub const CORPUS_VALID: &[&str] = &[
    "54.36.98.170|read.csdn.net|172.16.100.161:80|-|[07/Oct/2017:19:04:33 +0800]|\"GET / HTTP/1.1\"|302|25737|\"-\"|\"Mozilla/5.0\"|0.472|\"-\"|\"-\"",
    "10.0.0.7|blog.csdn.net|172.16.100.162:80|alice|[08/Oct/2017:09:15:02 +0800]|\"GET /article/details/78173 HTTP/1.1\"|200|48213|\"https://www.google.com/\"|\"Mozilla/5.0 (X11; Linux x86_64)\"|0.031|\"f81d4fae-7dec\"|\"sess-9921\"",
    "192.168.1.20|api.csdn.net|172.16.100.163:80|-|[08/Oct/2017:23:59:59 +0800]|\"POST /v1/comments HTTP/1.1\"|201|512|\"-\"|\"okhttp/3.9.0\"|1.204|\"b7e23ec2-9a1f\"|\"sess-0044\"",
    // Escaped quote (\x22) in referrer and UA, nginx-style.
    "203.0.113.9|read.csdn.net|172.16.100.161:80|-|[09/Oct/2017:00:00:01 +0800]|\"GET /search?q=rust HTTP/1.1\"|200|1090|\"\\x22quoted\\x22\"|\"agent \\x22v2\\x22\"|0.008|\"-\"|\"-\"",
];

/// Lines with the wrong field count — every one must come back MalformedLine.
pub const CORPUS_MALFORMED: &[&str] = &[
    "only|three|fields",
    "54.36.98.170|read.csdn.net|172.16.100.161:80|-|[07/Oct/2017:19:04:33 +0800]|\"GET / HTTP/1.1\"|302|25737|\"-\"|\"UA\"|0.472|\"-\"",
    "54.36.98.170|read.csdn.net|172.16.100.161:80|-|[07/Oct/2017:19:04:33 +0800]|\"GET / HTTP/1.1\"|302|25737|\"-\"|\"UA\"|0.472|\"-\"|\"-\"|extra",
    "no separators at all",
];

/// Generate `n` synthetic well-formed lines for throughput testing.
pub fn corpus_high_volume(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            format!(
                "10.0.{}.{}|read.csdn.net|172.16.100.161:80|-|[07/Oct/2017:{:02}:{:02}:{:02} +0800]|\"GET /article/{} HTTP/1.1\"|200|{}|\"-\"|\"Mozilla/5.0\"|0.{:03}|\"uuid-{}\"|\"sess-{}\"",
                i / 256 % 256,
                i % 256,
                i / 3600 % 24,
                i / 60 % 60,
                i % 60,
                i,
                1000 + i,
                i % 1000,
                i,
                i,
            )
        })
        .collect()
}
