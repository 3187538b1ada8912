//! The DescriptorComputer - memoized descriptor computation.

use crate::{Descriptor, FieldDescriptor, FieldOptions, PendingField, ShapeResult};
use docshape_core::{FieldSpec, Shape};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, trace};

type Classifier<M> = dyn Fn(&PendingField) -> ShapeResult<FieldOptions<M>> + Send + Sync;

type CachedDescriptor = Arc<dyn Any + Send + Sync>;

/// Computes and caches descriptors whose metadata is produced by one field
/// classifier.
///
/// The cache starts empty, fills on demand and is never evicted. Lookups and
/// first-time insertions for distinct types may run concurrently. Two threads
/// racing on the same uncached type both compute it; the first stored
/// descriptor wins and is returned to both.
pub struct DescriptorComputer<M> {
    classifier: Box<Classifier<M>>,
    cache: RwLock<HashMap<TypeId, CachedDescriptor>>,
}

impl<M: Send + Sync + 'static> DescriptorComputer<M> {
    /// Create a computer around a field classifier.
    pub fn new<F>(classifier: F) -> Self
    where
        F: Fn(&PendingField) -> ShapeResult<FieldOptions<M>> + Send + Sync + 'static,
    {
        Self {
            classifier: Box::new(classifier),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Get the descriptor of `S`, computing it on first use.
    ///
    /// A classifier failure aborts the computation and caches nothing, so a
    /// later call recomputes the type from scratch.
    pub fn compute<S: Shape>(&self) -> ShapeResult<Arc<Descriptor<S, M>>> {
        let key = TypeId::of::<S>();

        if let Some(descriptor) = self.lookup::<S>(key) {
            trace!(type_name = S::type_label(), "descriptor cache hit");
            return Ok(descriptor);
        }

        let mut descriptor = Descriptor::new(S::type_label());
        self.collect(S::type_label(), S::fields(), &mut descriptor)?;
        let descriptor = Arc::new(descriptor);

        debug!(
            type_name = S::type_label(),
            fields = descriptor.len(),
            "computed type descriptor"
        );

        let stored = {
            let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
            let erased: CachedDescriptor = descriptor.clone();
            Arc::clone(cache.entry(key).or_insert(erased))
        };

        Ok(stored.downcast::<Descriptor<S, M>>().unwrap_or(descriptor))
    }

    /// Check if `S` already has a cached descriptor.
    pub fn is_cached<S: Shape>(&self) -> bool {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&TypeId::of::<S>())
    }

    /// Number of cached types.
    pub fn cached_count(&self) -> usize {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn lookup<S: Shape>(&self, key: TypeId) -> Option<Arc<Descriptor<S, M>>> {
        let cached = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()?;
        cached.downcast::<Descriptor<S, M>>().ok()
    }

    /// Classify `specs` in declaration order into `out`, recursing into
    /// embedded fields.
    fn collect<S: Shape>(
        &self,
        owner: &'static str,
        specs: Vec<FieldSpec<S>>,
        out: &mut Descriptor<S, M>,
    ) -> ShapeResult<()> {
        for spec in specs {
            let pending = PendingField::from_spec(owner, &spec);
            let options = (self.classifier)(&pending)?;

            if options.skip {
                trace!(type_name = owner, field = pending.name, "field skipped");
                continue;
            }

            if options.embed {
                if let Some(nested) = spec.nested() {
                    self.collect(owner, nested, out)?;
                    continue;
                }
            }

            out.insert(options.name, FieldDescriptor::new(spec, options.meta));
        }
        Ok(())
    }
}

impl<M> fmt::Debug for DescriptorComputer<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cached = self
            .cache
            .read()
            .map(|cache| cache.len())
            .unwrap_or_default();
        f.debug_struct("DescriptorComputer")
            .field("cached", &cached)
            .finish_non_exhaustive()
    }
}
