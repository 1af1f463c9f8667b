//! `{name}` placeholder substitution.
//!
//! - `{name}` is replaced by the argument's display form.
//! - `{{` and `}}` produce literal braces.
//! - Unknown names (including inner spacing), `{}` and an unclosed `{` are
//!   kept verbatim.
//! - Substitution is a single pass; argument text is never re-scanned.
//! - Output is capped at [`MAX_EXPANDED_BYTES`].

use std::collections::HashMap;

use crate::label::ArgValue;

pub(crate) const MAX_EXPANDED_BYTES: usize = 64 * 1024;

// `args` is usually tiny; a HashMap only pays off past this.
const LINEAR_SEARCH_THRESHOLD: usize = 8;

/// Output buffer that stops accepting text at the byte cap.
struct Bounded {
    out: String,
    full: bool,
}

impl Bounded {
    fn with_capacity(hint: usize) -> Self {
        Self {
            out: String::with_capacity(hint.min(MAX_EXPANDED_BYTES)),
            full: false,
        }
    }

    fn push(&mut self, c: char) {
        if self.full {
            return;
        }
        if self.out.len() + c.len_utf8() > MAX_EXPANDED_BYTES {
            self.full = true;
            return;
        }
        self.out.push(c);
    }

    fn push_str(&mut self, s: &str) {
        if self.full {
            return;
        }
        let remaining = MAX_EXPANDED_BYTES - self.out.len();
        if s.len() <= remaining {
            self.out.push_str(s);
            return;
        }
        let mut end = remaining;
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        self.out.push_str(&s[..end]);
        self.full = true;
    }
}

enum Args<'a> {
    Linear(&'a [(&'a str, &'a ArgValue)]),
    Map(HashMap<&'a str, &'a ArgValue>),
}

impl<'a> Args<'a> {
    fn new(args: &'a [(&'a str, &'a ArgValue)]) -> Self {
        if args.len() > LINEAR_SEARCH_THRESHOLD {
            Args::Map(args.iter().copied().collect())
        } else {
            Args::Linear(args)
        }
    }

    fn get(&self, name: &str) -> Option<&'a ArgValue> {
        match self {
            Args::Linear(list) => list.iter().find(|(k, _)| *k == name).map(|(_, v)| *v),
            Args::Map(map) => map.get(name).copied(),
        }
    }
}

/// Substitute `{name}` markers in `template` with values from `args`.
pub fn interpolate(template: &str, args: &[(&str, &ArgValue)]) -> String {
    if !template.contains(['{', '}']) {
        return template.to_string();
    }

    let lookup = Args::new(args);
    let mut buf = Bounded::with_capacity(template.len() + 8);
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if buf.full {
            break;
        }
        match c {
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                }
                buf.push('}');
            }
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                buf.push('{');
            }
            '{' => {
                let mut name = String::new();
                let mut closed = false;
                for n in chars.by_ref() {
                    if n == '}' {
                        closed = true;
                        break;
                    }
                    name.push(n);
                }

                if !closed {
                    buf.push('{');
                    buf.push_str(&name);
                    break;
                }

                let trimmed = name.trim();
                if trimmed.is_empty() {
                    buf.push('{');
                    buf.push_str(&name);
                    buf.push('}');
                    continue;
                }

                match lookup.get(trimmed) {
                    Some(ArgValue::Str(s)) => buf.push_str(s),
                    Some(v) => buf.push_str(&v.to_string()),
                    None => {
                        buf.push('{');
                        buf.push_str(&name);
                        buf.push('}');
                    }
                }
            }
            _ => buf.push(c),
        }
    }

    buf.out
}
