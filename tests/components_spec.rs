use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dioxus::prelude::*;
use speculate2::speculate;
use storefront_admin::components::*;
use storefront_admin::routing::{History, Navigator, RouteParams, ORDER_ID};

thread_local! {
    static RENDERED_IDS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

#[derive(Default)]
struct CountingNavigator {
    backs: AtomicUsize,
}

impl Navigator for CountingNavigator {
    fn back(&self) {
        self.backs.fetch_add(1, Ordering::SeqCst);
    }
}

/// Detail view stand-in that records the ids it is mounted with.
#[allow(non_snake_case)]
fn FakeDetailView(props: OrderDetailProps) -> Element {
    RENDERED_IDS.with(|ids| ids.borrow_mut().push(props.order_id.clone()));
    rsx! { section { "fake {props.order_id}" } }
}

/// Detail view stand-in that navigates back as soon as it renders.
#[allow(non_snake_case)]
fn ReturningDetailView(props: OrderDetailProps) -> Element {
    RENDERED_IDS.with(|ids| ids.borrow_mut().push(props.order_id.clone()));
    props.on_back.call(());
    rsx! { section { "returning" } }
}

fn rendered_ids() -> Vec<String> {
    RENDERED_IDS.with(|ids| ids.borrow().clone())
}

speculate! {
    describe "heading_display" {
        it "renders each string exactly once" {
            let pairs = [("Featured", "Summer Sale"), ("new", "arrivals"), ("Limited", "Drop 07")];
            for (label, title) in pairs {
                let html = heading_display(label, title);
                assert_eq!(html.matches(label).count(), 1, "label {} in {}", label, html);
                assert_eq!(html.matches(title).count(), 1, "title {} in {}", title, html);
            }
        }

        it "keeps the label before the title" {
            let html = heading_display("Collection", "Winter");
            let label_at = html.find(">Collection</span>").unwrap();
            let title_at = html.find(">Winter</h2>").unwrap();
            assert!(label_at < title_at);
        }

        it "renders an empty block for empty strings" {
            let html = heading_display("", "");
            assert!(html.contains("></span>"));
            assert!(html.contains("></h2>"));
        }

        it "escapes markup in caller text" {
            let html = heading_display("<i>sale</i>", "Salt & Pepper");
            assert!(html.contains("&lt;i&gt;sale&lt;/i&gt;"));
            assert!(html.contains("Salt &amp; Pepper"));
            assert!(!html.contains("<i>"));
        }
    }

    describe "customers_page" {
        it "renders identical output on every call" {
            let outputs: Vec<String> = (0..3).map(|_| render_component(CustomersPage, ())).collect();
            assert!(outputs.windows(2).all(|w| w[0] == w[1]));
        }

        it "contains the title and placeholder" {
            let html = render_component(CustomersPage, ());
            assert!(html.contains("Customers"));
            assert!(html.contains("Customer list placeholder."));
        }
    }

    describe "reports_page" {
        it "renders identical output on every call" {
            assert_eq!(render_component(ReportsPage, ()), render_component(ReportsPage, ()));
        }

        it "contains the title and placeholder" {
            let html = render_component(ReportsPage, ());
            assert!(html.contains("Reports &amp; Analytics"));
            assert!(html.contains("Analytics dashboard coming soon."));
        }
    }

    describe "order detail page" {
        before {
            RENDERED_IDS.with(|ids| ids.borrow_mut().clear());
            let navigator = Arc::new(CountingNavigator::default());
        }

        it "delegates with the order id" {
            let params = RouteParams::new().with(ORDER_ID, "ORD-123");

            let html = render_order_detail(params, navigator.clone(), FakeDetailView);

            assert!(html.contains("fake ORD-123"));
            assert_eq!(rendered_ids(), vec!["ORD-123".to_string()]);
            assert_eq!(navigator.backs.load(Ordering::SeqCst), 0);
        }

        it "navigates back exactly once when the view calls back" {
            let params = RouteParams::new().with(ORDER_ID, "ORD-123");

            render_order_detail(params, navigator.clone(), ReturningDetailView);

            assert_eq!(navigator.backs.load(Ordering::SeqCst), 1);
        }

        it "passes the id through verbatim" {
            let params = RouteParams::new().with(ORDER_ID, " ord/42?x ");
            render_order_detail(params, navigator.clone(), FakeDetailView);
            assert_eq!(rendered_ids(), vec![" ord/42?x ".to_string()]);
        }

        it "renders nothing without an id" {
            let html = render_order_detail(RouteParams::new(), navigator.clone(), FakeDetailView);
            assert!(html.is_empty());
            assert!(rendered_ids().is_empty());
        }

        it "renders nothing for an empty id" {
            let params = RouteParams::new().with(ORDER_ID, "");
            let html = render_order_detail(params, navigator.clone(), ReturningDetailView);
            assert!(html.is_empty());
            assert!(rendered_ids().is_empty());
            assert_eq!(navigator.backs.load(Ordering::SeqCst), 0);
        }

        it "moves an in-memory history back one step" {
            let history = Arc::new(History::starting_at("/admin/customers"));
            history.push("/admin/orders/ORD-7");
            let params = RouteParams::new().with(ORDER_ID, "ORD-7");

            render_order_detail(params, history.clone(), ReturningDetailView);

            assert_eq!(history.current().as_deref(), Some("/admin/customers"));
        }

        it "wires the default frame's back control to the callback" {
            let params = RouteParams::new().with(ORDER_ID, "ORD-8");

            let html = render_order_detail(params, navigator.clone(), OrderSummaryFrame);

            assert!(html.contains(">Back</button>"));
            assert!(!html.contains("history.back()"));
            assert_eq!(navigator.backs.load(Ordering::SeqCst), 0);
        }
    }
}
