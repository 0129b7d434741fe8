use std::collections::{BTreeMap, BTreeSet};

/// Textual macro substitution applied to stored path templates at use time.
pub trait MacroExpander {
    fn expand(&self, input: &str) -> String;
}

impl<F> MacroExpander for F
where
    F: Fn(&str) -> String,
{
    fn expand(&self, input: &str) -> String {
        self(input)
    }
}

pub(crate) fn expand_with(expander: Option<&dyn MacroExpander>, input: &str) -> String {
    match expander {
        Some(expander) => expander.expand(input),
        None => input.to_string(),
    }
}

/// Replaces `%{name}` tokens from a fixed table. Unknown names stay verbatim.
#[derive(Debug, Clone, Default)]
pub struct VariableExpander {
    variables: BTreeMap<String, String>,
}

impl VariableExpander {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl MacroExpander for VariableExpander {
    fn expand(&self, input: &str) -> String {
        replace_tokens(input, &self.variables)
    }
}

fn replace_tokens(input: &str, variables: &BTreeMap<String, String>) -> String {
    let mut cursor = 0usize;
    let mut output = String::new();
    while let Some(start_rel) = input[cursor..].find("%{") {
        let start = cursor + start_rel;
        output.push_str(&input[cursor..start]);

        let token_start = start + 2;
        let Some(end_rel) = input[token_start..].find('}') else {
            output.push_str(&input[start..]);
            cursor = input.len();
            break;
        };
        let end = token_start + end_rel;
        let name = &input[token_start..end];
        match variables.get(name) {
            Some(value) => output.push_str(value),
            None => output.push_str(&input[start..=end]),
        }
        cursor = end + 1;
    }
    if cursor < input.len() {
        output.push_str(&input[cursor..]);
    }
    output
}

/// Sorted, de-duplicated names of the `%{..}` tokens still present in `input`.
pub fn unresolved_variables(input: &str) -> Vec<String> {
    let mut names = BTreeSet::new();
    let mut cursor = 0usize;
    while let Some(start_rel) = input[cursor..].find("%{") {
        let start = cursor + start_rel + 2;
        let Some(end_rel) = input[start..].find('}') else {
            break;
        };
        let end = start + end_rel;
        if end > start {
            names.insert(input[start..end].to_string());
        }
        cursor = end + 1;
    }
    names.into_iter().collect()
}
