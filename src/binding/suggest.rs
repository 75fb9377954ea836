/*
 * Licensed to the Apache Software Foundation (ASF) under one
 * or more contributor license agreements.  See the NOTICE file
 * distributed with this work for additional information
 * regarding copyright ownership.  The ASF licenses this file
 * to you under the Apache License, Version 2.0 (the
 * "License"); you may not use this file except in compliance
 * with the License.  You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing,
 * software distributed under the License is distributed on an
 * "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
 * KIND, either express or implied.  See the License for the
 * specific language governing permissions and limitations
 * under the License.
 */

//! Unknown-variable audit: warn about prefixed environment variables that
//! match no declaration, with close-name suggestions. Purely diagnostic;
//! never affects binding.

use super::snapshot::EnvSnapshot;
use tracing::warn;

const MAX_SUGGESTIONS: usize = 3;

/// Warn once per unknown variable carrying `prefix`.
pub(crate) fn warn_unknown_vars(prefix: &str, known: &[&str], env: &EnvSnapshot) {
    for name in env.names() {
        if !name.starts_with(prefix) || known.contains(&name) {
            continue;
        }
        let suggestions = similar_names(name, known);
        if suggestions.is_empty() {
            warn!("Unknown environment variable '{}' will be ignored.", name);
        } else {
            warn!(
                "Unknown environment variable '{}' will be ignored. Similar variables: {}?",
                name,
                suggestions.join(", ")
            );
        }
    }
}

/// Up to three known names within a relative edit-distance threshold,
/// closest first.
pub(crate) fn similar_names(unknown: &str, known: &[&str]) -> Vec<String> {
    let unknown_lower = unknown.to_lowercase();
    let mut candidates: Vec<(usize, &str)> = known
        .iter()
        .filter_map(|candidate| {
            let distance = edit_distance(&unknown_lower, &candidate.to_lowercase());
            let threshold = (unknown.len().max(candidate.len()) * 3 / 10).max(3);
            (distance <= threshold).then_some((distance, *candidate))
        })
        .collect();
    candidates.sort_by_key(|(distance, _)| *distance);
    candidates
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, name)| name.to_owned())
        .collect()
}

/// Levenshtein distance over chars, single working row.
fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, a_char) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let substitution = diagonal + usize::from(a_char != *b_char);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b_chars.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_distance_basics() {
        assert_eq!(edit_distance("hello", "hello"), 0);
        assert_eq!(edit_distance("hello", "hallo"), 1);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("ab", "abc"), 1);
        assert_eq!(edit_distance("abc", "ab"), 1);
    }

    #[test]
    fn similar_names_catches_transpositions_and_typos() {
        let known = ["APP_ENABLED", "APP_NAME", "APP_COUNT"];
        assert!(similar_names("APP_ENABELD", &known).contains(&"APP_ENABLED".to_owned()));
        assert!(similar_names("APP_NANE", &known).contains(&"APP_NAME".to_owned()));
    }

    #[test]
    fn similar_names_ignores_unrelated_input() {
        let known = ["APP_ENABLED", "APP_NAME"];
        assert!(similar_names("COMPLETELY_DIFFERENT", &known).is_empty());
    }

    #[test]
    fn similar_names_caps_suggestions() {
        let known = ["VAR_A", "VAR_B", "VAR_C", "VAR_D", "VAR_E"];
        assert!(similar_names("VAR_X", &known).len() <= MAX_SUGGESTIONS);
    }
}
