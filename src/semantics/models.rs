//! Enumeration of every model over a list of variables

use super::Model;
use crate::formula::is_variable;
use std::sync::Arc;

/// Largest variable count whose models can be counted in a `u64`
pub(crate) const MAX_ENUMERABLE_VARIABLES: usize = 63;

/// Iterator over all `2^n` models of `n` variables
///
/// Created by [`all_models`]. Models are produced in binary counting order:
/// the first variable is the most significant bit, and `false` comes before
/// `true`. A clone taken before iteration replays the whole enumeration.
#[derive(Debug, Clone)]
pub struct AllModels {
    variables: Arc<[Arc<str>]>,
    next_index: u64,
    end: u64,
}

impl AllModels {
    /// The variables being enumerated, in the order given
    pub fn variables(&self) -> &[Arc<str>] {
        &self.variables
    }

    fn model_at(&self, index: u64) -> Model {
        let n = self.variables.len();
        self.variables
            .iter()
            .enumerate()
            .map(|(position, name)| {
                let bit = n - 1 - position;
                (Arc::clone(name), (index >> bit) & 1 == 1)
            })
            .collect()
    }
}

impl Iterator for AllModels {
    type Item = Model;

    fn next(&mut self) -> Option<Model> {
        if self.next_index >= self.end {
            return None;
        }
        let model = self.model_at(self.next_index);
        self.next_index += 1;
        Some(model)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.end - self.next_index) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Enumerate every model over `variables`
///
/// Yields exactly `2^n` models for `n` variables; an empty list yields a
/// single empty model.
///
/// # Panics
///
/// Panics if a name is not a variable, or if there are more than 63
/// variables.
///
/// # Examples
///
/// ```
/// use propositions::all_models;
///
/// let rows: Vec<(bool, bool)> = all_models(&["p", "q"])
///     .map(|model| (model["p"], model["q"]))
///     .collect();
/// assert_eq!(rows, [(false, false), (false, true), (true, false), (true, true)]);
/// ```
pub fn all_models<S: AsRef<str>>(variables: &[S]) -> AllModels {
    let variables: Arc<[Arc<str>]> = variables
        .iter()
        .map(|name| {
            let name = name.as_ref();
            assert!(is_variable(name), "{name:?} is not a variable name");
            Arc::from(name)
        })
        .collect();
    assert!(
        variables.len() <= MAX_ENUMERABLE_VARIABLES,
        "Cannot enumerate models over {} variables",
        variables.len()
    );
    AllModels {
        end: 1u64 << variables.len(),
        variables,
        next_index: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_empty_variable_list_yields_one_model() {
        let models: Vec<Model> = all_models::<&str>(&[]).collect();
        assert_eq!(models.len(), 1);
        assert!(models[0].is_empty());
    }

    #[test]
    fn test_model_count_and_distinctness() {
        let vars = ["p", "q", "r", "s1"];
        let models = all_models(&vars);
        assert_eq!(models.size_hint(), (16, Some(16)));

        let rows: HashSet<Vec<bool>> = models
            .map(|model| vars.iter().map(|v| model[*v]).collect())
            .collect();
        assert_eq!(rows.len(), 16);
    }

    #[test]
    fn test_last_variable_varies_fastest() {
        let first_three: Vec<Vec<bool>> = all_models(&["x", "y", "z"])
            .take(3)
            .map(|m| vec![m["x"], m["y"], m["z"]])
            .collect();
        assert_eq!(
            first_three,
            vec![
                vec![false, false, false],
                vec![false, false, true],
                vec![false, true, false],
            ]
        );
    }

    #[test]
    fn test_clone_is_restartable() {
        let models = all_models(&["p", "q"]);
        let first: Vec<Model> = models.clone().collect();
        let second: Vec<Model> = models.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_variables_keep_given_order() {
        let models = all_models(&[String::from("q"), String::from("p")]);
        let names: Vec<&str> = models.variables().iter().map(|v| &**v).collect();
        assert_eq!(names, ["q", "p"]);
    }

    #[test]
    #[should_panic(expected = "not a variable name")]
    fn test_rejects_non_variables() {
        let _ = all_models(&["p", "A"]);
    }
}
