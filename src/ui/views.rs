//! Page views as pure functions from render state to markup

use crate::core::Bill;
use crate::ui::dom::El;

pub const LOADING_TEXT: &str = "Loading...";
pub const DEFAULT_BILLS_TITLE: &str = "Mes notes de frais";

/// Test ids the pages expose
pub mod test_ids {
    pub const ICON_WINDOW: &str = "icon-window";
    pub const ICON_MAIL: &str = "icon-mail";
    pub const ICON_EYE: &str = "icon-eye";
    pub const RECEIPT_MODAL: &str = "modaleFileEmployee";
    pub const BILLS_TBODY: &str = "tbody";
    pub const ERROR_MESSAGE: &str = "error-message";
}

/// Attribute carrying the receipt URL on each eye icon
pub const BILL_URL_ATTRIBUTE: &str = "data-bill-url";

/// Id of the receipt modal element
pub const RECEIPT_MODAL_ID: &str = "modaleFile";

/// What the bills page is asked to show
#[derive(Debug, Clone, Copy)]
pub enum RenderState<'a> {
    Loading,
    Error(&'a str),
    Data(&'a [Bill]),
}

/// Render the bills page for a given state
///
/// Rows are emitted in the order received; callers sort beforehand.
pub fn bills_ui(state: RenderState<'_>, title: &str) -> El {
    match state {
        RenderState::Loading => loading_page(),
        RenderState::Error(message) => error_page(message),
        RenderState::Data(bills) => bills_page(bills, title),
    }
}

pub fn loading_page() -> El {
    El::new("div")
        .class("layout")
        .child(vertical_layout())
        .child(El::new("div").class("content").id("loading").text(LOADING_TEXT))
}

pub fn error_page(message: &str) -> El {
    El::new("div").class("layout").child(vertical_layout()).child(
        El::new("div")
            .class("content")
            .test_id(test_ids::ERROR_MESSAGE)
            .child(El::new("div").text(message)),
    )
}

/// Side navigation with the bills and mail icons
pub fn vertical_layout() -> El {
    El::new("div")
        .class("vertical-navbar")
        .child(El::new("div").class("layout-title").text("Billed"))
        .child(
            El::new("div")
                .id("layout-icon1")
                .test_id(test_ids::ICON_WINDOW)
                .child(icon("window")),
        )
        .child(
            El::new("div")
                .id("layout-icon2")
                .test_id(test_ids::ICON_MAIL)
                .child(icon("mail")),
        )
}

fn icon(name: &str) -> El {
    El::new("span")
        .class("icon")
        .class(&format!("icon-{name}"))
        .attr("aria-hidden", "true")
}

fn bills_page(bills: &[Bill], title: &str) -> El {
    El::new("div")
        .class("layout")
        .child(vertical_layout())
        .child(
            El::new("div")
                .class("content")
                .child(
                    El::new("div")
                        .class("content-header")
                        .child(El::new("div").class("content-title").text(title)),
                )
                .child(El::new("div").id("data-table").child(bills_table(bills))),
        )
        .child(receipt_modal())
}

fn bills_table(bills: &[Bill]) -> El {
    let header = ["Type", "Nom", "Date", "Montant", "Statut", "Actions"]
        .into_iter()
        .map(|label| El::new("th").text(label));

    El::new("table")
        .id("example")
        .class("table")
        .class("table-striped")
        .child(El::new("thead").child(El::new("tr").children(header)))
        .child(
            El::new("tbody")
                .test_id(test_ids::BILLS_TBODY)
                .children(bills.iter().map(bill_row)),
        )
}

fn bill_row(bill: &Bill) -> El {
    El::new("tr")
        .child(El::new("td").text(&bill.bill_type))
        .child(El::new("td").text(&bill.name))
        .child(El::new("td").text(&bill.date))
        .child(El::new("td").text(format!("{} €", bill.amount)))
        .child(El::new("td").text(bill.status.label()))
        .child(El::new("td").child(actions(&bill.file_url)))
}

fn actions(bill_url: &str) -> El {
    El::new("div").class("icon-actions").child(
        El::new("div")
            .id("eye")
            .test_id(test_ids::ICON_EYE)
            .attr(BILL_URL_ATTRIBUTE, bill_url)
            .child(icon("eye")),
    )
}

/// Hidden receipt preview, opened by the eye icons
pub fn receipt_modal() -> El {
    El::new("div")
        .class("modal")
        .class("fade")
        .id(RECEIPT_MODAL_ID)
        .test_id(test_ids::RECEIPT_MODAL)
        .attr("tabindex", "-1")
        .attr("role", "dialog")
        .attr("aria-hidden", "true")
        .attr("style", "display: none;")
        .child(
            El::new("div").class("modal-dialog").attr("role", "document").child(
                El::new("div")
                    .class("modal-content")
                    .child(
                        El::new("div")
                            .class("modal-header")
                            .child(El::new("h5").class("modal-title").text("Justificatif")),
                    )
                    .child(El::new("div").class("modal-body")),
            ),
        )
}

/// Content placed in the modal body for a receipt
pub fn receipt_preview(bill_url: &str, width: u32) -> El {
    El::new("div").class("bill-proof-container").child(
        El::new("img")
            .attr("width", width.to_string())
            .attr("src", bill_url)
            .attr("alt", "Bill"),
    )
}
