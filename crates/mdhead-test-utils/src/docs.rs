//! Sample documents.

/// A blog post with every recognized key and one unrecognized key.
pub const BLOG_POST: &str = "<!-- +
title: test title
urlid: test-title
overview: this is a sample markdown that the tool will parse
cate: sample of usage
tags: #sample, #test, #parse
lang: en
image: test-title.png
author: someone
published_at: 2020-09-06T12:23:00Z
updated_at: 2020-10-14T12:23:00+08:00
+ -->
## title
content
## sub title
sub content
";

/// Body of [`BLOG_POST`], starting right after the close marker.
pub const BLOG_POST_BODY: &str = "
## title
content
## sub title
sub content
";

/// Build a document from head lines and a body.
pub fn document(head_lines: &[&str], body: &str) -> String {
    let mut doc = String::from("<!-- +\n");
    for line in head_lines {
        doc.push_str(line);
        doc.push('\n');
    }
    doc.push_str("+ -->");
    doc.push_str(body);
    doc
}

/// A document whose body is `body_len` bytes of markdown-ish filler.
///
/// Returns the document and the byte length of its head block.
pub fn large_document(body_len: usize) -> (Vec<u8>, usize) {
    let head = document(&["title: big", "urlid: big-doc"], "");
    let filler = b"lorem ipsum dolor sit amet\n";

    let mut doc = Vec::with_capacity(head.len() + body_len);
    doc.extend_from_slice(head.as_bytes());
    let mut remaining = body_len;
    while remaining > 0 {
        let n = remaining.min(filler.len());
        doc.extend_from_slice(&filler[..n]);
        remaining -= n;
    }
    (doc, head.len())
}
