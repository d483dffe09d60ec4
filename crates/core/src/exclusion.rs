//! Mutual exclusion groups and the check run after each resolution.

use itertools::Itertools;
use log::trace;

use crate::error::Error::{
    EmptyMutualOptions, InvalidMutuallyExclusiveOptions, MutuallyExclusiveOptions,
};
use crate::error::{Error, Result};
use crate::option::{OptionId, OptionKind};
use crate::patterns::is_short_option;
use crate::registry::Registry;
use crate::resolution::Resolution;

/// Reference to a group member, captured when the group is formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusiveMember {
    pub id: OptionId,
    pub short: String,
    pub long: String,
    pub is_required: bool,
}

/// Options of which at most one may be passed per parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutualExclusionGroup {
    members: Vec<ExclusiveMember>,
}

impl MutualExclusionGroup {
    /// Builds a group from registered short names.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Fewer than two names are given (`EmptyMutualOptions`)
    /// - A name is malformed (`InvalidOptionFormat`) or not registered (`UnknownOptions`)
    /// - A member is an optional-valued option (`InvalidMutuallyExclusiveOptions`)
    pub fn new<S: AsRef<str>>(registry: &Registry, shorts: &[S]) -> Result<Self> {
        if shorts.len() < 2 {
            return Err(EmptyMutualOptions);
        }

        let members = shorts
            .iter()
            .map(|short| {
                let short = short.as_ref();
                if !is_short_option(short) {
                    return Err(Error::invalid_short(short));
                }

                let (id, definition) = registry
                    .find_short(short)
                    .ok_or_else(|| Error::unknown(short))?;

                if definition.kind == OptionKind::Optional {
                    return Err(InvalidMutuallyExclusiveOptions {
                        option: short.to_string(),
                    });
                }

                Ok(ExclusiveMember {
                    id,
                    short: definition.short.clone(),
                    long: definition.long.clone(),
                    is_required: definition.is_required(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { members })
    }

    pub fn members(&self) -> &[ExclusiveMember] {
        &self.members
    }

    pub fn contains(&self, id: OptionId) -> bool {
        self.members.iter().any(|member| member.id == id)
    }

    pub fn shorts(&self) -> Vec<String> {
        self.members.iter().map(|m| m.short.clone()).collect()
    }

    /// Help banner annotation, e.g. `[-a|-b]`.
    pub fn banner_annotation(&self) -> String {
        format!("[{}]", self.members.iter().map(|m| &m.short).join("|"))
    }
}

/// Fails if another member of any group containing `id` already holds a passed value.
///
/// Optional-valued options never take part, and the option itself being set is
/// not a conflict.
///
/// # Errors
///
/// Returns [`MutuallyExclusiveOptions`] naming every short in the offending group.
pub fn check(
    id: OptionId,
    kind: OptionKind,
    groups: &[MutualExclusionGroup],
    resolution: &Resolution,
) -> Result<()> {
    if kind == OptionKind::Optional {
        return Ok(());
    }

    for group in groups.iter().filter(|group| group.contains(id)) {
        let conflict = group
            .members
            .iter()
            .any(|member| member.id != id && resolution.is_set(member.id));

        if conflict {
            trace!("Exclusion conflict in group {}", group.banner_annotation());
            return Err(MutuallyExclusiveOptions {
                options: group.shorts(),
            });
        }
    }

    Ok(())
}
