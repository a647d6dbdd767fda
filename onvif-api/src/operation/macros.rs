//! Declarative macro for ONVIF operation definitions
//!
//! Most ONVIF actions are a handful of scalar parameters in and a single
//! response element out. The macro generates the request struct and the
//! [`OnvifOperation`](crate::operation::OnvifOperation) impl from a compact
//! description.

/// Define an ONVIF operation with minimal boilerplate
///
/// Generates `<Operation>Request` with the given fields plus the unit
/// operation type.
///
/// # Example
/// ```rust,ignore
/// define_onvif_operation! {
///     /// Reboot the device
///     operation: SystemRebootOperation,
///     action: "SystemReboot",
///     service: Device,
///     request: {},
///     response: String,
///     payload: |_req| Ok(String::new()),
///     parse: |response| Ok(xml::text_or_default(response, &["Message"])),
/// }
/// ```
#[macro_export]
macro_rules! define_onvif_operation {
    (
        $(#[$meta:meta])*
        operation: $op_struct:ident,
        action: $action:literal,
        service: $service:ident,
        request: {
            $($(#[$field_meta:meta])* $field:ident: $field_type:ty),* $(,)?
        },
        response: $response_type:ty,
        payload: |$req_param:ident| $payload_expr:expr,
        parse: |$xml_param:ident| $parse_expr:expr $(,)?
    ) => {
        $crate::__private::paste! {
            #[doc = concat!("Request for the `", $action, "` action")]
            #[derive(Debug, Clone, Default, PartialEq)]
            pub struct [<$op_struct Request>] {
                $($(#[$field_meta])* pub $field: $field_type,)*
            }

            $(#[$meta])*
            #[derive(Debug, Clone, Copy)]
            pub struct $op_struct;

            impl $crate::operation::OnvifOperation for $op_struct {
                type Request = [<$op_struct Request>];
                type Response = $response_type;

                const SERVICE: $crate::service::Service = $crate::service::Service::$service;
                const ACTION: &'static str = $action;

                #[allow(unused_variables)]
                fn build_payload(
                    $req_param: &Self::Request,
                ) -> ::std::result::Result<String, $crate::operation::ValidationError> {
                    $payload_expr
                }

                fn parse_response(
                    $xml_param: &$crate::xml::Element,
                ) -> ::std::result::Result<Self::Response, $crate::error::ApiError> {
                    $parse_expr
                }
            }
        }
    };
}
