use crate::dependency_graph::domain::{
    ComponentLookup, CoordinateField, Gav, PropertyTable, RawCoordinates, RawDescriptor,
    ResolutionOutcome, ResolutionWarning, ResolvedDependency, ResolvedDescriptor, WarningKind,
    UNKNOWN,
};
use std::collections::{HashMap, HashSet};

/// Maximum number of parent links followed from one descriptor
pub const MAX_PARENT_HOPS: usize = 10;

/// Maximum number of substitution passes over one value
pub const MAX_INTERPOLATION_PASSES: usize = 5;

const BUILT_IN_PREFIXES: [&str; 2] = ["project", "pom"];

/// IdentityResolver service computing final coordinates for a batch of descriptors.
///
/// Resolution never fails: anything that cannot be resolved becomes
/// [`UNKNOWN`] and is reported as a [`ResolutionWarning`]. Every loop is
/// bounded, so malformed or cyclic input always terminates.
pub struct IdentityResolver;

impl IdentityResolver {
    /// Resolves a whole batch.
    ///
    /// The batch is indexed up front, so a parent that appears later in the
    /// slice is still found. `prior` is consulted only when a parent chain
    /// leaves the batch.
    pub fn resolve_batch(
        descriptors: &[RawDescriptor],
        prior: &impl ComponentLookup,
    ) -> ResolutionOutcome {
        let index = BatchIndex::new(descriptors);
        let mut warnings = Vec::new();

        let chains: Vec<ParentChain> = (0..descriptors.len())
            .map(|i| index.parent_chain(i, &mut warnings))
            .collect();

        let identities: Vec<Identity> = chains
            .iter()
            .map(|chain| index.resolve_identity(chain, prior, &mut warnings))
            .collect();

        let resolved = chains
            .iter()
            .zip(&identities)
            .map(|(chain, identity)| {
                let parent = match chain.members.get(1) {
                    Some(&p) => Some(identities[p].gav.clone()),
                    None => identity.external_parent.clone(),
                };
                let dependencies = index.resolve_dependencies(chain, identity, &mut warnings);
                ResolvedDescriptor {
                    source_label: descriptors[chain.start()].source_label.clone(),
                    gav: identity.gav.clone(),
                    parent,
                    dependencies,
                }
            })
            .collect();

        for warning in &warnings {
            tracing::warn!("{}", warning);
        }
        tracing::debug!(
            descriptors = descriptors.len(),
            warnings = warnings.len(),
            "resolved batch"
        );

        ResolutionOutcome {
            descriptors: resolved,
            warnings,
        }
    }
}

/// Substitutes `${key}` placeholders until nothing changes or the pass bound is hit
pub fn interpolate(value: &str, table: &PropertyTable) -> String {
    let mut current = value.to_string();
    for _ in 0..MAX_INTERPOLATION_PASSES {
        let next = substitute_once(&current, table);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

fn substitute_once(value: &str, table: &PropertyTable) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let key = &after[..end];
                match table.get(key) {
                    Some(replacement) => out.push_str(replacement),
                    None => out.push_str(&rest[start..start + end + 3]),
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Interpolated value, or `None` when a placeholder survives or nothing is left
fn resolve_value(value: &str, table: &PropertyTable) -> Option<String> {
    let result = interpolate(value, table);
    let trimmed = result.trim();
    if trimmed.is_empty() || trimmed.contains("${") {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Built-in `project.*` / `pom.*` entries for one descriptor, from its raw fields
fn built_in_properties(descriptor: &RawDescriptor) -> PropertyTable {
    let own = &descriptor.coordinates;
    let parent = descriptor.parent.clone().unwrap_or_default();
    let entries = [
        ("groupId", own.group.clone().or_else(|| parent.group.clone())),
        ("artifactId", own.artifact.clone()),
        ("version", own.version.clone().or_else(|| parent.version.clone())),
        ("parent.groupId", parent.group.clone()),
        ("parent.artifactId", parent.artifact.clone()),
        ("parent.version", parent.version.clone()),
    ];

    let mut table = PropertyTable::new();
    for prefix in BUILT_IN_PREFIXES {
        for (suffix, value) in &entries {
            if let Some(value) = value {
                table.insert(format!("{}.{}", prefix, suffix), value.clone());
            }
        }
    }
    table
}

fn field_of(coordinates: &RawCoordinates, field: CoordinateField) -> Option<&str> {
    match field {
        CoordinateField::Group => coordinates.group.as_deref(),
        CoordinateField::Artifact => coordinates.artifact.as_deref(),
        CoordinateField::Version => coordinates.version.as_deref(),
    }
}

/// Descriptor indices from a descriptor up through its in-batch ancestors
struct ParentChain {
    members: Vec<usize>,
    /// Interpolated parent reference that matched nothing in the batch
    external: Option<RawCoordinates>,
}

impl ParentChain {
    fn start(&self) -> usize {
        self.members[0]
    }
}

struct Identity {
    gav: Gav,
    external_parent: Option<Gav>,
    /// Merged table with `project.*` built-ins pinned to the resolved identity
    table: PropertyTable,
}

struct BatchIndex<'a> {
    descriptors: &'a [RawDescriptor],
    local_tables: Vec<PropertyTable>,
    by_gav: HashMap<(String, String, String), usize>,
    by_ga: HashMap<(String, String), Vec<usize>>,
}

impl<'a> BatchIndex<'a> {
    fn new(descriptors: &'a [RawDescriptor]) -> Self {
        let mut local_tables = Vec::with_capacity(descriptors.len());
        let mut by_gav = HashMap::new();
        let mut by_ga: HashMap<(String, String), Vec<usize>> = HashMap::new();

        for (i, descriptor) in descriptors.iter().enumerate() {
            let mut table = built_in_properties(descriptor);
            for (key, value) in &descriptor.properties {
                table.entry(key.clone()).or_insert_with(|| value.clone());
            }

            let parent = descriptor.parent.clone().unwrap_or_default();
            let declared = |own: &Option<String>, inherited: &Option<String>| {
                own.as_ref()
                    .or(inherited.as_ref())
                    .and_then(|v| resolve_value(v, &table))
            };
            let group = declared(&descriptor.coordinates.group, &parent.group);
            let artifact = declared(&descriptor.coordinates.artifact, &None);
            let version = declared(&descriptor.coordinates.version, &parent.version);

            if let (Some(group), Some(artifact)) = (group, artifact) {
                if let Some(version) = version {
                    by_gav
                        .entry((group.clone(), artifact.clone(), version))
                        .or_insert(i);
                }
                by_ga.entry((group, artifact)).or_default().push(i);
            }
            local_tables.push(table);
        }

        Self {
            descriptors,
            local_tables,
            by_gav,
            by_ga,
        }
    }

    /// Finds the batch descriptor a parent reference points at
    fn find_parent(&self, reference: &RawCoordinates) -> Option<usize> {
        let group = reference.group.as_deref()?;
        let artifact = reference.artifact.as_deref()?;

        // A concrete version only ever matches exactly
        if let Some(version) = reference.version.as_deref() {
            let key = (group.to_string(), artifact.to_string(), version.to_string());
            return self.by_gav.get(&key).copied();
        }

        match self
            .by_ga
            .get(&(group.to_string(), artifact.to_string()))
            .map(Vec::as_slice)
        {
            Some([only]) => Some(*only),
            _ => None,
        }
    }

    fn interpolated_reference(&self, i: usize) -> Option<RawCoordinates> {
        let reference = self.descriptors[i].parent.as_ref()?;
        let table = &self.local_tables[i];
        let resolve = |v: &Option<String>| v.as_deref().and_then(|v| resolve_value(v, table));
        Some(RawCoordinates {
            group: resolve(&reference.group),
            artifact: resolve(&reference.artifact),
            version: resolve(&reference.version),
        })
    }

    fn parent_chain(&self, start: usize, warnings: &mut Vec<ResolutionWarning>) -> ParentChain {
        let label = &self.descriptors[start].source_label;
        let mut members = vec![start];
        let mut visited = HashSet::from([start]);
        let mut current = start;

        loop {
            let Some(reference) = self.interpolated_reference(current) else {
                return ParentChain {
                    members,
                    external: None,
                };
            };

            if members.len() > MAX_PARENT_HOPS {
                warnings.push(ResolutionWarning::new(
                    label,
                    WarningKind::ParentChainTooLong {
                        hops: MAX_PARENT_HOPS,
                    },
                ));
                return ParentChain {
                    members,
                    external: None,
                };
            }

            match self.find_parent(&reference) {
                Some(parent) if visited.contains(&parent) => {
                    warnings.push(ResolutionWarning::new(
                        label,
                        WarningKind::ParentCycle {
                            revisited: self.descriptors[parent].source_label.clone(),
                        },
                    ));
                    return ParentChain {
                        members,
                        external: None,
                    };
                }
                Some(parent) => {
                    visited.insert(parent);
                    members.push(parent);
                    current = parent;
                }
                None => {
                    return ParentChain {
                        members,
                        external: Some(reference),
                    };
                }
            }
        }
    }

    /// Merged table for the chain suffix starting at `from`: built-ins, then
    /// the descriptor's own properties, then each ancestor's (nearest wins)
    fn merged_table(&self, chain: &[usize]) -> PropertyTable {
        let mut table = self.local_tables[chain[0]].clone();
        for &ancestor in &chain[1..] {
            for (key, value) in &self.descriptors[ancestor].properties {
                table.entry(key.clone()).or_insert_with(|| value.clone());
            }
        }
        table
    }

    /// Inheritable field (group or version): own value, parent reference,
    /// then each ancestor's own value and reference in turn
    fn inherit_field(
        &self,
        chain: &ParentChain,
        tables: &[PropertyTable],
        field: CoordinateField,
        prior: &impl ComponentLookup,
    ) -> Result<String, Option<String>> {
        let mut first_unresolved: Option<String> = None;

        for (k, &member) in chain.members.iter().enumerate() {
            let descriptor = &self.descriptors[member];
            let table = &tables[k];
            let reference = descriptor.parent.as_ref();
            let candidates = [
                field_of(&descriptor.coordinates, field),
                reference.and_then(|r| field_of(r, field)),
            ];
            for expression in candidates.into_iter().flatten() {
                match resolve_value(expression, table) {
                    Some(value) => return Ok(value),
                    None => {
                        first_unresolved.get_or_insert_with(|| expression.to_string());
                    }
                }
            }
        }

        if let Some(found) = chain.external.as_ref().and_then(|r| lookup_prior(r, prior)) {
            let value = match field {
                CoordinateField::Group => found.group(),
                CoordinateField::Artifact => found.artifact(),
                CoordinateField::Version => found.version(),
            };
            return Ok(value.to_string());
        }

        Err(first_unresolved)
    }

    fn resolve_identity(
        &self,
        chain: &ParentChain,
        prior: &impl ComponentLookup,
        warnings: &mut Vec<ResolutionWarning>,
    ) -> Identity {
        let descriptor = &self.descriptors[chain.start()];
        let label = &descriptor.source_label;
        let tables: Vec<PropertyTable> = (0..chain.members.len())
            .map(|k| self.merged_table(&chain.members[k..]))
            .collect();

        let mut settle = |result: Result<String, Option<String>>, field| match result {
            Ok(value) => value,
            Err(expression) => {
                warnings.push(ResolutionWarning::new(
                    label,
                    unresolved_kind(field, expression, None),
                ));
                UNKNOWN.to_string()
            }
        };

        let group = settle(
            self.inherit_field(chain, &tables, CoordinateField::Group, prior),
            CoordinateField::Group,
        );
        let artifact = {
            let expression = descriptor.coordinates.artifact.as_deref();
            match expression.and_then(|e| resolve_value(e, &tables[0])) {
                Some(value) => Ok(value),
                None => Err(expression.map(String::from)),
            }
        };
        let artifact = settle(artifact, CoordinateField::Artifact);
        let version = settle(
            self.inherit_field(chain, &tables, CoordinateField::Version, prior),
            CoordinateField::Version,
        );

        let external_parent = chain.external.as_ref().map(|reference| {
            lookup_prior(reference, prior).unwrap_or_else(|| {
                let part = |v: &Option<String>| v.clone().unwrap_or_else(|| UNKNOWN.to_string());
                Gav::new(
                    part(&reference.group),
                    part(&reference.artifact),
                    part(&reference.version),
                )
            })
        });

        let mut table = tables.into_iter().next().unwrap_or_default();
        for prefix in BUILT_IN_PREFIXES {
            for (suffix, value) in [("groupId", &group), ("artifactId", &artifact), ("version", &version)] {
                if value != UNKNOWN {
                    table.insert(format!("{}.{}", prefix, suffix), value.clone());
                }
            }
        }

        Identity {
            gav: Gav::new(group, artifact, version),
            external_parent,
            table,
        }
    }

    fn resolve_dependencies(
        &self,
        chain: &ParentChain,
        identity: &Identity,
        warnings: &mut Vec<ResolutionWarning>,
    ) -> Vec<ResolvedDependency> {
        let descriptor = &self.descriptors[chain.start()];
        let label = &descriptor.source_label;

        descriptor
            .dependencies
            .iter()
            .map(|dependency| {
                let owner = Some(dependency.artifact.clone());
                let mut settle = |expression: Option<&str>, field| {
                    match expression.and_then(|e| resolve_value(e, &identity.table)) {
                        Some(value) => value,
                        None => {
                            warnings.push(ResolutionWarning::new(
                                label,
                                unresolved_kind(field, expression.map(String::from), owner.clone()),
                            ));
                            UNKNOWN.to_string()
                        }
                    }
                };
                let group = settle(dependency.group.as_deref(), CoordinateField::Group);
                let artifact = settle(Some(dependency.artifact.as_str()), CoordinateField::Artifact);
                let version = settle(dependency.version.as_deref(), CoordinateField::Version);

                ResolvedDependency {
                    gav: Gav::new(group, artifact, version),
                    scope: dependency.scope.clone(),
                    optional: dependency.optional,
                }
            })
            .collect()
    }
}

fn lookup_prior(reference: &RawCoordinates, prior: &impl ComponentLookup) -> Option<Gav> {
    let group = reference.group.as_deref()?;
    let artifact = reference.artifact.as_deref()?;
    prior.find_component(group, artifact, reference.version.as_deref())
}

fn unresolved_kind(
    field: CoordinateField,
    expression: Option<String>,
    dependency: Option<String>,
) -> WarningKind {
    match expression {
        Some(expression) => WarningKind::UnresolvedPlaceholder {
            field,
            expression,
            dependency,
        },
        None => WarningKind::MissingField { field, dependency },
    }
}
