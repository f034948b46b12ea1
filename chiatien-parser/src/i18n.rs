#[cfg(all(feature = "vi", feature = "en"))]
compile_error!("Cannot enable both 'vi' and 'en' features at the same time");

use nom::error::Error;

const SNIPPET_CHARS: usize = 24;

fn snippet(input: &str) -> String {
    let mut snippet: String = input.chars().take(SNIPPET_CHARS).collect();
    if input.chars().count() > SNIPPET_CHARS {
        snippet.push('…');
    }
    snippet
}

fn failed_at(err: &nom::Err<Error<&str>>) -> Option<String> {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => Some(snippet(e.input)),
        nom::Err::Incomplete(_) => None,
    }
}

#[cfg(feature = "vi")]
pub fn syntax_error_detail(err: nom::Err<Error<&str>>) -> String {
    match failed_at(&err) {
        Some(input) if !input.is_empty() => format!("không hiểu được đoạn \"{input}\""),
        _ => "câu lệnh chưa hoàn chỉnh".to_string(),
    }
}

#[cfg(feature = "vi")]
pub fn syntax_error_unparsed_detail(input: &str) -> String {
    format!("thừa nội dung: \"{}\"", snippet(input))
}

#[cfg(not(feature = "vi"))]
pub fn syntax_error_detail(err: nom::Err<Error<&str>>) -> String {
    match failed_at(&err) {
        Some(input) if !input.is_empty() => format!("unexpected input near \"{input}\""),
        _ => "incomplete statement".to_string(),
    }
}

#[cfg(not(feature = "vi"))]
pub fn syntax_error_unparsed_detail(input: &str) -> String {
    format!("unparsed input: \"{}\"", snippet(input))
}
