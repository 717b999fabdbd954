//! Order detail page: a thin adapter in front of a delegate detail view.

use std::sync::Arc;

use dioxus::prelude::*;

use super::heading::HeadingDisplay;
use super::render::render_component;
use crate::routing::{Navigator, RouteParams, ORDER_ID};

/// What a delegate detail view receives: the order identifier and a
/// zero-argument callback that moves navigation back one step.
#[derive(Props, Clone, PartialEq)]
pub struct OrderDetailProps {
    pub order_id: String,
    pub on_back: Callback,
}

/// Renders full order details for one order.
///
/// Implementations own data retrieval and their own error states. The page
/// only hands over the identifier and a way back.
pub type OrderDetailView = Component<OrderDetailProps>;

/// A navigator passed as a component prop. Two handles are equal when they
/// point at the same navigator.
#[derive(Clone)]
pub struct NavigatorHandle(Arc<dyn Navigator>);

impl NavigatorHandle {
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self(navigator)
    }

    pub fn back(&self) {
        self.0.back()
    }
}

impl PartialEq for NavigatorHandle {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

/// Without a non-empty `id` parameter nothing is rendered and `view` is not
/// mounted. Otherwise `view` renders inside the page container with the
/// identifier verbatim and a callback bound to `navigator.back()`.
#[component]
pub fn OrderDetailPage(
    params: RouteParams,
    navigator: NavigatorHandle,
    view: OrderDetailView,
) -> Element {
    let on_back = use_callback(move |()| navigator.back());

    let Some(order_id) = params.get(ORDER_ID) else {
        tracing::debug!("Order detail rendered without an order id");
        return VNode::empty();
    };

    #[allow(non_snake_case)]
    let DetailView = view;

    rsx! {
        div { class: "container mx-auto py-6",
            DetailView { order_id: order_id.to_string(), on_back: on_back }
        }
    }
}

/// Render the order detail page to HTML. Empty when there is no order id.
pub fn render_order_detail(
    params: RouteParams,
    navigator: Arc<dyn Navigator>,
    view: OrderDetailView,
) -> String {
    render_component(
        OrderDetailPage,
        OrderDetailPageProps::builder()
            .params(params)
            .navigator(NavigatorHandle::new(navigator))
            .view(view)
            .build(),
    )
}

/// Default detail view: the order identifier under a heading plus a back
/// control wired to `on_back`.
#[allow(non_snake_case)]
pub fn OrderSummaryFrame(props: OrderDetailProps) -> Element {
    let OrderDetailProps { order_id, on_back } = props;

    rsx! {
        article { class: "space-y-4", "data-order-id": "{order_id}",
            HeadingDisplay { subheading: "Order".to_string(), heading: order_id.clone() }
            button {
                r#type: "button",
                class: "btn btn-secondary",
                onclick: move |_| on_back.call(()),
                "Back"
            }
        }
    }
}
