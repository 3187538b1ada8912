//! Mutation engine - resolves mutation fields and dispatches them to kinds.

use std::collections::HashSet;

use docshape_core::Shape;
use docshape_registry::{DescriptorComputer, FieldDescriptor};
use tracing::{debug, trace};

use crate::config::EngineConfig;
use crate::document::UpdateDocument;
use crate::error::{MutationError, MutationResult};
use crate::kind::{MutationData, MutationKind, RenderData};
use crate::meta::{classify_mutation, classify_target, MutationMeta, TargetMeta};
use crate::registry::MutationRegistry;

/// Applies mutation structs to targets, or renders them as update documents.
///
/// The engine holds no per-call state. One instance can serve many threads;
/// the only shared mutable state is the descriptor cache of each side.
#[derive(Debug)]
pub struct MutationEngine {
    config: EngineConfig,
    kinds: MutationRegistry,
    targets: DescriptorComputer<TargetMeta>,
    mutations: DescriptorComputer<MutationMeta>,
}

impl MutationEngine {
    /// An engine with the default configuration and the built-in kinds.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> MutationEngineBuilder {
        MutationEngineBuilder::default()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn kinds(&self) -> &MutationRegistry {
        &self.kinds
    }

    /// Apply every field of `mutation` to `target` in place.
    ///
    /// Stops at the first failing field. Fields processed before it stay
    /// applied.
    pub fn apply<T: Shape, M: Shape>(&self, target: &mut T, mutation: &M) -> MutationResult<()> {
        self.dispatch::<T, M, _>(
            mutation,
            "apply",
            |kind| kind.applier(),
            |field, applier, data| applier.apply(field.write(&mut *target), &data),
        )
    }

    /// Render `mutation` as an update document for targets of type `T`.
    ///
    /// Only the shape of `T` is consulted.
    pub fn render<T: Shape, M: Shape>(&self, mutation: &M) -> MutationResult<UpdateDocument> {
        let mut document = UpdateDocument::new();
        self.dispatch::<T, M, _>(
            mutation,
            "render",
            |kind| kind.renderer(),
            |field, renderer, data| {
                let fragment = renderer.render(&RenderData {
                    data,
                    wire_name: &field.meta().wire_name,
                    target_type: field.value_type(),
                })?;
                document.insert(renderer.operator(), fragment);
                Ok(())
            },
        )?;
        Ok(document)
    }

    /// Resolve each mutation field and hand it to `visit` with the capability
    /// picked by `resolve`.
    ///
    /// A wire field is visited at most once per call.
    fn dispatch<'k, T, M, H>(
        &'k self,
        mutation: &M,
        capability: &str,
        resolve: impl Fn(&'k dyn MutationKind) -> Option<&'k H>,
        mut visit: impl FnMut(&FieldDescriptor<T, TargetMeta>, &H, MutationData<'_>) -> MutationResult<()>,
    ) -> MutationResult<()>
    where
        T: Shape,
        M: Shape,
        H: ?Sized + 'k,
    {
        let targets = self.targets.compute::<T>()?;
        let mutations = self.mutations.compute::<M>()?;
        let mut claimed = HashSet::new();

        for (name, field) in mutations.iter() {
            let meta = field.meta();

            let target_field = targets.get(&meta.target_field).ok_or_else(|| {
                MutationError::unknown_target_field(T::type_label(), &meta.target_field)
            })?;

            let kind = self.kinds.get(&meta.kind).ok_or_else(|| {
                MutationError::unknown_mutation_kind(&meta.kind, &meta.target_field)
            })?;

            if target_field.meta().skip {
                return Err(MutationError::skipped_target_field(
                    T::type_label(),
                    &meta.target_field,
                ));
            }

            let handler = resolve(kind).ok_or_else(|| {
                MutationError::missing_capability(&meta.kind, &meta.target_field, capability)
            })?;

            let Some(value) = field.read(mutation) else {
                trace!(field = name, "mutation field unreachable, skipped");
                continue;
            };

            if meta.args.is_set(&self.config.omit_empty_arg) && value.is_zero() {
                trace!(field = name, "empty mutation value omitted");
                continue;
            }

            if !claimed.insert(target_field.meta().wire_name.as_str()) {
                return Err(MutationError::conflicting_wire_field(
                    T::type_label(),
                    &target_field.meta().wire_name,
                ));
            }

            visit(
                target_field,
                handler,
                MutationData {
                    value,
                    args: &meta.args,
                    field_name: &meta.target_field,
                    kind_name: &meta.kind,
                },
            )?;
        }

        Ok(())
    }
}

impl Default for MutationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`MutationEngine`].
#[derive(Debug)]
pub struct MutationEngineBuilder {
    config: EngineConfig,
    kinds: MutationRegistry,
}

impl Default for MutationEngineBuilder {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            kinds: MutationRegistry::with_builtins(),
        }
    }
}

impl MutationEngineBuilder {
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a mutation kind, replacing any kind with the same name.
    pub fn register(mut self, name: impl Into<String>, kind: impl MutationKind + 'static) -> Self {
        self.kinds.register(name, kind);
        self
    }

    /// Start from `kinds` instead of the built-ins.
    pub fn kinds(mut self, kinds: MutationRegistry) -> Self {
        self.kinds = kinds;
        self
    }

    pub fn build(self) -> MutationEngine {
        let target_config = self.config.clone();
        let mutation_config = self.config.clone();

        debug!(kinds = ?self.kinds.names(), "mutation engine ready");

        MutationEngine {
            config: self.config,
            kinds: self.kinds,
            targets: DescriptorComputer::new(move |field| classify_target(&target_config, field)),
            mutations: DescriptorComputer::new(move |field| {
                classify_mutation(&mutation_config, field)
            }),
        }
    }
}
