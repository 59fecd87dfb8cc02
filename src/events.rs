use std::{future::Future, sync::Arc};

use k8s_openapi::api::core::v1::{Event, EventSource, ObjectReference};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use kube::{
    api::{Api, DynamicObject, ObjectMeta, PostParams},
    runtime::events::EventType,
    Client, Resource, ResourceExt,
};
use tracing::*;

use crate::crd::{
    ClusterManager, IndexerCluster, LicenseManager, MonitoringConsole, SearchHeadCluster,
    Standalone, API_GROUP, API_VERSION,
};
use crate::{Error, PublishContext, Result};

/// A resource kind that events can be reported against.
pub trait EventSubject {
    fn name(&self) -> String;
    fn namespace(&self) -> String;
    /// Build a fresh event whose involved object is `self`.
    fn new_event(&self, type_: EventType, reason: &str, message: &str) -> Event;
}

/// Capability to persist an event in the cluster.
///
/// Implementations must tolerate concurrent calls from many publishers.
pub trait EventSink {
    fn create(&self, event: &Event) -> impl Future<Output = Result<()>> + Send;
}

impl EventSink for Client {
    fn create(&self, event: &Event) -> impl Future<Output = Result<()>> + Send {
        let api: Api<Event> = match event.metadata.namespace.as_deref() {
            Some(ns) => Api::namespaced(self.clone(), ns),
            None => Api::default_namespaced(self.clone()),
        };
        async move {
            api.create(&PostParams::default(), event)
                .await
                .map(|_| ())
                .map_err(Error::KubeError)
        }
    }
}

impl<T: EventSink + Send + Sync> EventSink for Arc<T> {
    fn create(&self, event: &Event) -> impl Future<Output = Result<()>> + Send {
        self.as_ref().create(event)
    }
}

impl<T: EventSink + Send + Sync> EventSink for &T {
    fn create(&self, event: &Event) -> impl Future<Output = Result<()>> + Send {
        (**self).create(event)
    }
}

fn event_type_str(type_: EventType) -> &'static str {
    match type_ {
        EventType::Normal => "Normal",
        EventType::Warning => "Warning",
    }
}

/// Build a `core/v1` event for `obj`, reported by `component`.
pub fn new_event<K>(
    obj: &K,
    component: &str,
    type_: EventType,
    reason: &str,
    message: &str,
) -> Event
where
    K: Resource<DynamicType = ()>,
{
    let now = Time(chrono::Utc::now());
    Event {
        metadata: ObjectMeta {
            generate_name: Some(format!("{}-", obj.meta().name.clone().unwrap_or_default())),
            namespace: obj.meta().namespace.clone(),
            ..Default::default()
        },
        involved_object: obj.object_ref(&()),
        type_: Some(event_type_str(type_).to_string()),
        reason: Some(reason.to_string()),
        message: Some(message.to_string()),
        source: Some(EventSource {
            component: Some(format!("splunk-{component}-controller")),
            host: None,
        }),
        reporting_component: Some(format!("{API_GROUP}/{component}-controller")),
        first_timestamp: Some(now.clone()),
        last_timestamp: Some(now),
        count: Some(1),
        ..Default::default()
    }
}

crate::event_subject!(kind: Standalone, component: "standalone");
crate::event_subject!(kind: LicenseManager, component: "licensemanager");
crate::event_subject!(kind: IndexerCluster, component: "indexercluster");
crate::event_subject!(kind: ClusterManager, component: "clustermanager");
crate::event_subject!(kind: MonitoringConsole, component: "monitoringconsole");
crate::event_subject!(kind: SearchHeadCluster, component: "searchheadcluster");

/// The resource instance a publisher reports on.
///
/// Only the Splunk kinds are published; anything else is carried as
/// `Unsupported` and publishing against it does nothing.
#[derive(Clone, Debug)]
pub enum Subject {
    Standalone(Arc<Standalone>),
    LicenseManager(Arc<LicenseManager>),
    IndexerCluster(Arc<IndexerCluster>),
    ClusterManager(Arc<ClusterManager>),
    MonitoringConsole(Arc<MonitoringConsole>),
    SearchHeadCluster(Arc<SearchHeadCluster>),
    Unsupported(ObjectReference),
}

impl Subject {
    /// Wrap a resource of a kind the publisher does not report on.
    pub fn unsupported<K: Resource<DynamicType = ()>>(obj: &K) -> Self {
        Subject::Unsupported(obj.object_ref(&()))
    }

    /// Resolve an untyped object by its `apiVersion` and `kind`.
    ///
    /// Objects of a Splunk kind that do not parse as that kind end up `Unsupported`.
    pub fn from_dynamic(obj: &DynamicObject) -> Self {
        let Some(types) = obj.types.as_ref() else {
            return Subject::Unsupported(dynamic_object_ref(obj));
        };
        if types.api_version != format!("{API_GROUP}/{API_VERSION}") {
            return Subject::Unsupported(dynamic_object_ref(obj));
        }
        let parsed = match types.kind.as_str() {
            "Standalone" => obj.clone().try_parse::<Standalone>().map(Subject::from),
            "LicenseManager" => obj.clone().try_parse::<LicenseManager>().map(Subject::from),
            "IndexerCluster" => obj.clone().try_parse::<IndexerCluster>().map(Subject::from),
            "ClusterManager" => obj.clone().try_parse::<ClusterManager>().map(Subject::from),
            "MonitoringConsole" => obj.clone().try_parse::<MonitoringConsole>().map(Subject::from),
            "SearchHeadCluster" => obj.clone().try_parse::<SearchHeadCluster>().map(Subject::from),
            _ => return Subject::Unsupported(dynamic_object_ref(obj)),
        };
        parsed.unwrap_or_else(|e| {
            debug!(kind = %types.kind, name = %obj.name_any(), "unable to parse object: {e}");
            Subject::Unsupported(dynamic_object_ref(obj))
        })
    }

    /// The subject as an event source, or `None` when unsupported.
    pub fn resolve(&self) -> Option<&dyn EventSubject> {
        let subject: &dyn EventSubject = match self {
            Subject::Standalone(cr) => &**cr,
            Subject::LicenseManager(cr) => &**cr,
            Subject::IndexerCluster(cr) => &**cr,
            Subject::ClusterManager(cr) => &**cr,
            Subject::MonitoringConsole(cr) => &**cr,
            Subject::SearchHeadCluster(cr) => &**cr,
            Subject::Unsupported(_) => return None,
        };
        Some(subject)
    }

    pub fn is_supported(&self) -> bool {
        self.resolve().is_some()
    }

    pub fn kind(&self) -> String {
        match self {
            Subject::Standalone(_) => Standalone::kind(&()).to_string(),
            Subject::LicenseManager(_) => LicenseManager::kind(&()).to_string(),
            Subject::IndexerCluster(_) => IndexerCluster::kind(&()).to_string(),
            Subject::ClusterManager(_) => ClusterManager::kind(&()).to_string(),
            Subject::MonitoringConsole(_) => MonitoringConsole::kind(&()).to_string(),
            Subject::SearchHeadCluster(_) => SearchHeadCluster::kind(&()).to_string(),
            Subject::Unsupported(oref) => oref.kind.clone().unwrap_or_default(),
        }
    }
}

fn dynamic_object_ref(obj: &DynamicObject) -> ObjectReference {
    ObjectReference {
        api_version: obj.types.as_ref().map(|t| t.api_version.clone()),
        kind: obj.types.as_ref().map(|t| t.kind.clone()),
        name: obj.metadata.name.clone(),
        namespace: obj.metadata.namespace.clone(),
        uid: obj.metadata.uid.clone(),
        ..Default::default()
    }
}

/// Publishes Kubernetes events against a single Splunk resource.
///
/// Publishing is best effort: `normal` and `warning` return nothing, and a
/// failed submission is logged and dropped without retry. A publisher without
/// a client (tests, disabled mode) does nothing.
pub struct EventPublisher<C> {
    client: Option<C>,
    subject: Subject,
}

impl EventPublisher<Client> {
    /// A publisher that never submits anything.
    pub fn disabled(subject: impl Into<Subject>) -> Self {
        Self {
            client: None,
            subject: subject.into(),
        }
    }
}

impl<C: EventSink> EventPublisher<C> {
    /// Construction cannot currently fail; the subject kind is only checked on publish.
    pub fn new(client: Option<C>, subject: impl Into<Subject>) -> Result<Self> {
        Ok(Self {
            client,
            subject: subject.into(),
        })
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// Publish an informational event.
    pub async fn normal(&self, ctx: &PublishContext, reason: &str, message: &str) {
        self.publish(ctx, EventType::Normal, reason, message).await
    }

    /// Publish a warning event.
    pub async fn warning(&self, ctx: &PublishContext, reason: &str, message: &str) {
        self.publish(ctx, EventType::Warning, reason, message).await
    }

    async fn publish(&self, ctx: &PublishContext, type_: EventType, reason: &str, message: &str) {
        let Some(client) = self.client.as_ref() else {
            return;
        };
        let Some(subject) = self.subject.resolve() else {
            return;
        };
        let name = subject.name();
        let namespace = subject.namespace();
        let event = subject.new_event(type_, reason, message);

        async {
            info!(%name, %namespace, reason, note = message, "publishing event");
            if let Err(e) = ctx.run(client.create(&event)).await {
                error!(
                    %name, %namespace, reason, note = message, error = %e,
                    "failed to record event, ignoring"
                );
            }
        }
        .instrument(info_span!("PublishEvent"))
        .await
    }
}
