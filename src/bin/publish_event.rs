use std::time::Duration;

use clap::{Parser, ValueEnum};
use kube::{
    api::{Api, ApiResource, DynamicObject, GroupVersionKind},
    Client,
};
use operator::{
    crd::{API_GROUP, API_VERSION},
    telemetry, EventPublisher, EventSink, PublishContext, Subject,
};
use tracing::*;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Severity {
    Normal,
    Warning,
}

/// Publish a Kubernetes event against a Splunk custom resource
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Kind of the resource, e.g. IndexerCluster
    #[arg(short, long)]
    kind: String,
    /// Name of the resource
    #[arg(short = 'N', long)]
    name: String,
    /// Namespace of the resource, defaults to the kubeconfig namespace
    #[arg(short, long)]
    namespace: Option<String>,
    #[arg(short = 't', long = "type", value_enum, default_value = "normal")]
    severity: Severity,
    #[arg(short, long)]
    reason: String,
    #[arg(short, long)]
    message: String,
    /// Give up on the submission after this many seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,
}

impl Args {
    fn context(&self) -> PublishContext {
        PublishContext::background().with_timeout(Duration::from_secs(self.timeout))
    }
}

/// Publish against `obj`, returning false when its kind is not published.
async fn publish<C: EventSink>(
    client: C,
    obj: &DynamicObject,
    args: &Args,
) -> anyhow::Result<bool> {
    let subject = Subject::from_dynamic(obj);
    if !subject.is_supported() {
        warn!(
            kind = %args.kind, name = %args.name,
            "kind is not published by the operator, nothing to do"
        );
        return Ok(false);
    }

    let publisher = EventPublisher::new(Some(client), subject)?;
    let ctx = args.context();
    match args.severity {
        Severity::Normal => publisher.normal(&ctx, &args.reason, &args.message).await,
        Severity::Warning => publisher.warning(&ctx, &args.reason, &args.message).await,
    }
    Ok(true)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init().await;
    let args = Args::parse();

    let client = Client::try_default().await?;
    let gvk = GroupVersionKind::gvk(API_GROUP, API_VERSION, &args.kind);
    let resource = ApiResource::from_gvk(&gvk);
    let api: Api<DynamicObject> = match &args.namespace {
        Some(ns) => Api::namespaced_with(client.clone(), ns, &resource),
        None => Api::default_namespaced_with(client.clone(), &resource),
    };
    let obj = api.get(&args.name).await?;

    publish(client, &obj, &args).await?;
    Ok(())
}
