//! Expansion of short-flag clusters such as `-abc`.

use log::trace;

use crate::error::Error::InvalidOption;
use crate::error::{Error, Result};
use crate::exclusion::{self, MutualExclusionGroup};
use crate::option::{OptionDefinition, OptionId, Value};
use crate::registry::Registry;
use crate::resolution::Resolution;

/// Sets every flag in `cluster` to `true`, left to right, running the exclusion
/// check and handler for each.
///
/// Every letter is validated before any flag is touched, so an unknown or
/// value-taking letter leaves the resolution and handlers untouched.
///
/// # Errors
///
/// Returns an error if:
/// - A letter has no registered short option (`UnknownOptions`)
/// - A letter maps to a required or optional option (`InvalidOption`)
/// - A flag conflicts with an already passed option (`MutuallyExclusiveOptions`)
/// - A handler fails (`Handler`)
pub fn expand(
    cluster: &str,
    registry: &Registry,
    groups: &[MutualExclusionGroup],
    resolution: &mut Resolution,
) -> Result<()> {
    let flags = cluster
        .trim_start_matches('-')
        .chars()
        .map(|letter| {
            let short = format!("-{letter}");
            let (id, definition) = registry
                .find_short(&short)
                .ok_or_else(|| Error::unknown(&short))?;

            if !definition.is_flag() {
                return Err(InvalidOption {
                    option: short,
                    cluster: cluster.to_string(),
                });
            }

            Ok((id, definition))
        })
        .collect::<Result<Vec<(OptionId, &OptionDefinition)>>>()?;

    for (id, definition) in flags {
        exclusion::check(id, definition.kind, groups, resolution)?;
        resolution.set(id, Value::Bool(true));
        trace!("Coupled flag {} enabled from `{cluster}`", definition.short);
        definition.run_handler(resolution.get(id))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::NewOption;
    use std::sync::{Arc, Mutex};

    fn registry(calls: &Arc<Mutex<Vec<String>>>) -> Registry {
        let mut registry = Registry::new();
        for (short, long) in [("-a", "--all"), ("-b", "--brief"), ("-c", "--color")] {
            let calls = Arc::clone(calls);
            registry
                .register(NewOption::new(short, long, "").handler(move |key, _| {
                    calls.lock().unwrap().push(key.to_string());
                    Ok(())
                }))
                .unwrap();
        }
        registry
            .register(NewOption::new("-n", "--name value", ""))
            .unwrap();
        registry
    }

    #[test]
    fn test_expands_all_flags_in_order() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let registry = registry(&calls);
        let mut resolution = Resolution::initial(&registry);

        expand("-cab", &registry, &[], &mut resolution).unwrap();

        for short in ["-a", "-b", "-c"] {
            let (id, _) = registry.find(short).unwrap();
            assert_eq!(resolution.get(id), Some(&Value::Bool(true)));
        }
        assert_eq!(*calls.lock().unwrap(), vec!["color", "all", "brief"]);
    }

    #[test]
    fn test_unknown_letter_fails_before_any_handler() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let registry = registry(&calls);
        let mut resolution = Resolution::initial(&registry);

        let result = expand("-abz", &registry, &[], &mut resolution);

        assert!(matches!(result, Err(Error::UnknownOptions { token }) if token == "-z"));
        assert!(calls.lock().unwrap().is_empty());
        assert_eq!(resolution, Resolution::initial(&registry));
    }

    #[test]
    fn test_value_option_in_cluster_fails_before_any_handler() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let registry = registry(&calls);
        let mut resolution = Resolution::initial(&registry);

        let result = expand("-anb", &registry, &[], &mut resolution);

        assert!(matches!(
            result,
            Err(InvalidOption { option, cluster }) if option == "-n" && cluster == "-anb"
        ));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_exclusion_applies_inside_cluster() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let registry = registry(&calls);
        let groups = vec![MutualExclusionGroup::new(&registry, &["-a", "-b"]).unwrap()];
        let mut resolution = Resolution::initial(&registry);

        let result = expand("-ab", &registry, &groups, &mut resolution);
        assert!(matches!(result, Err(Error::MutuallyExclusiveOptions { .. })));
    }
}
