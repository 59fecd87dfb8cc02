/// Wire a custom resource kind into the event publisher.
///
/// Implements [`EventSubject`](crate::events::EventSubject) for the kind and the
/// conversions into the matching [`Subject`](crate::events::Subject) variant, which
/// must share the kind's name.
#[macro_export]
macro_rules! event_subject {
    (
        kind: $kind:ident,
        component: $component:literal
    ) => {
        impl $crate::events::EventSubject for $kind {
            fn name(&self) -> String {
                kube::ResourceExt::name_any(self)
            }

            fn namespace(&self) -> String {
                kube::ResourceExt::namespace(self).unwrap_or_default()
            }

            fn new_event(
                &self,
                type_: kube::runtime::events::EventType,
                reason: &str,
                message: &str,
            ) -> k8s_openapi::api::core::v1::Event {
                $crate::events::new_event(self, $component, type_, reason, message)
            }
        }

        impl From<std::sync::Arc<$kind>> for $crate::events::Subject {
            fn from(cr: std::sync::Arc<$kind>) -> Self {
                $crate::events::Subject::$kind(cr)
            }
        }

        impl From<$kind> for $crate::events::Subject {
            fn from(cr: $kind) -> Self {
                $crate::events::Subject::$kind(std::sync::Arc::new(cr))
            }
        }
    };
}
