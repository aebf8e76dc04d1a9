//! Resource service implementation.
//!
//! The ResourceService owns the populated resource registry and handles
//! listing and read requests. Registration is driven by the catalog in
//! `registry.rs`; the registry is immutable once built.

use std::collections::HashMap;

use rmcp::model::{AnnotateAble, RawResource, ReadResourceResult, Resource, ResourceContents};
use tracing::{debug, info};

use super::error::ResourceError;
use super::registry::{CATALOG, MARKDOWN_MIME, ResourceSpec};
use super::store::DocStore;
use crate::core::config::ResourcesConfig;

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The static descriptor this entry was registered from.
    pub spec: &'static ResourceSpec,

    /// The resource metadata advertised to clients.
    pub resource: Resource,
}

/// Service for listing and resolving documentation resources.
///
/// Entries are held in a `Vec` so enumeration reproduces registration order,
/// with a URI index for lookup.
pub struct ResourceService {
    store: DocStore,
    entries: Vec<ResourceEntry>,
    index: HashMap<&'static str, usize>,
}

impl ResourceService {
    /// Build the service and register the full catalog.
    ///
    /// Fails on a duplicate URI, which is a configuration defect and must
    /// stop the process before it starts serving.
    pub fn new(config: &ResourcesConfig) -> Result<Self, ResourceError> {
        info!("Initializing ResourceService");

        let mut service = Self {
            store: DocStore::new(config.docs_dir.clone()),
            entries: Vec::with_capacity(CATALOG.len()),
            index: HashMap::with_capacity(CATALOG.len()),
        };

        for spec in CATALOG {
            service.register(spec)?;
        }

        Ok(service)
    }

    /// Register a single resource descriptor.
    fn register(&mut self, spec: &'static ResourceSpec) -> Result<(), ResourceError> {
        if self.index.contains_key(spec.uri) {
            return Err(ResourceError::duplicate_uri(spec.uri));
        }

        debug!("Registering resource: {}", spec.uri);

        let mut raw = RawResource::new(spec.uri, spec.title);
        raw.description = Some(spec.description.to_string());
        raw.mime_type = Some(MARKDOWN_MIME.to_string());

        self.index.insert(spec.uri, self.entries.len());
        self.entries.push(ResourceEntry {
            spec,
            resource: raw.no_annotation(),
        });

        Ok(())
    }

    /// Number of registered resources.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty (a misconfigured system only).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// List all resources in registration order.
    pub fn list(&self) -> Vec<Resource> {
        self.entries
            .iter()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Resolve a resource by URI.
    ///
    /// A URI absent from the registry is an error. A registered URI whose
    /// backing document is missing still succeeds, returning a placeholder
    /// naming the missing file, so a client can tell a bad URI apart from a
    /// document that has not been written yet.
    pub fn read(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .index
            .get(uri)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let text = self
            .store
            .read(entry.spec.doc_file)
            .unwrap_or_else(|| format!("Document not found: {}", entry.spec.doc_file));

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: entry.resource.raw.mime_type.clone(),
                text,
                meta: None,
            }],
        })
    }
}
