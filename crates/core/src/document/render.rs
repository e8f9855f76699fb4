//! HTML rendering of a budget.

use std::fmt::Write;

use atrio_shared::types::CountryProfile;
use rust_decimal::Decimal;

use super::error::DocumentError;
use crate::budget::{Budget, line_total};
use crate::company::Company;

/// Validity shown when the budget has no explicit end date.
pub const DEFAULT_VALIDITY: &str = "30 days";

const STYLE: &str = "@page{size:A4;margin:12mm}\
body{font-family:Helvetica,Arial,sans-serif;color:#1e293b;margin:0}\
.page{width:186mm;margin:0 auto}\
header{display:flex;justify-content:space-between;background:#0f172a;color:#fff;padding:8mm;border-radius:4mm}\
header img{max-height:20mm;max-width:40mm}\
h1{margin:0 0 2mm;font-size:20pt;text-transform:uppercase}\
.ref{text-align:right}.ref .number{font-size:18pt;font-weight:700}\
.client{display:flex;justify-content:space-between;border:1px solid #e2e8f0;border-radius:3mm;padding:6mm;margin:6mm 0}\
table{width:100%;border-collapse:collapse;font-size:9pt}\
th{background:#f1f5f9;text-align:left;padding:2mm}td{padding:2mm;border-bottom:1px solid #f1f5f9}\
.num{text-align:right}.notes{white-space:pre-wrap;background:#f8fafc;padding:4mm;margin:6mm 0}\
.totals{margin-left:auto;width:80mm;margin-top:6mm}.totals div{display:flex;justify-content:space-between;padding:1mm 0}\
.grand{font-size:14pt;font-weight:700;border-top:2px solid #0f172a}\
.signatures{display:flex;justify-content:space-between;margin-top:20mm}\
.signatures div{width:70mm;border-top:1px solid #94a3b8;text-align:center;padding-top:2mm;font-size:8pt}\
footer{margin-top:10mm;font-size:7pt;color:#64748b;text-align:center}";

/// A rendered document ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Suggested download name.
    pub file_name: String,
    /// MIME type.
    pub content_type: &'static str,
    /// Document body.
    pub body: String,
}

/// Budget document renderer.
pub struct BudgetDocument;

impl BudgetDocument {
    /// Renders the budget as a printable HTML page.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::NoItems` for a budget without items and
    /// `DocumentError::CompanyMismatch` when the company did not issue it.
    pub fn render(budget: &Budget, company: &Company) -> Result<RenderedDocument, DocumentError> {
        if budget.company_id != company.id {
            return Err(DocumentError::CompanyMismatch);
        }
        if budget.items.is_empty() {
            return Err(DocumentError::NoItems);
        }

        let profile = company.country.profile();
        let totals = budget.totals();
        let mut html = String::with_capacity(8 * 1024);

        write!(
            html,
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{}</title><style>{STYLE}</style></head><body><div class=\"page\">",
            escape_html(&budget.number)
        )?;

        write_issuer(&mut html, budget, company, &profile)?;
        write_client(&mut html, budget, &profile)?;
        write_items(&mut html, budget, &profile)?;

        if !budget.notes.trim().is_empty() {
            write!(html, "<section class=\"notes\">{}</section>", escape_html(budget.notes.trim()))?;
        }

        html.push_str("<section class=\"totals\">");
        write!(
            html,
            "<div><span>Subtotal</span><span>{}</span></div>",
            profile.format_amount(totals.subtotal)
        )?;
        if budget.is_vat_enabled {
            write!(
                html,
                "<div><span>{} ({}%)</span><span>{}</span></div>",
                escape_html(profile.vat_label),
                budget.tax_rate.normalize(),
                profile.format_amount(totals.tax)
            )?;
        }
        write!(
            html,
            "<div class=\"grand\"><span>Total ({})</span><span>{}</span></div></section>",
            profile.currency.code(),
            profile.format_amount(totals.total)
        )?;

        write!(
            html,
            "<section class=\"signatures\"><div>{}</div><div>Client</div></section>",
            escape_html(&company.name)
        )?;
        write!(
            html,
            "<footer>Authentication code {}</footer></div></body></html>",
            authentication_code(budget)
        )?;

        Ok(RenderedDocument {
            file_name: format!("Orcamento_{}.html", budget.number),
            content_type: "text/html; charset=utf-8",
            body: html,
        })
    }
}

fn write_issuer(
    html: &mut String,
    budget: &Budget,
    company: &Company,
    profile: &CountryProfile,
) -> Result<(), DocumentError> {
    html.push_str("<header><div>");
    if company.logo.starts_with("data:image/") {
        write!(html, "<img src=\"{}\" alt=\"\">", escape_html(&company.logo))?;
    }
    write!(html, "<h1>{}</h1>", escape_html(&company.name))?;
    write!(
        html,
        "<p>{}: {}<br>Tel: {}<br>Email: {}<br>{}</p>",
        escape_html(profile.tax_id_label),
        escape_html(&company.nif),
        escape_html(&company.phone),
        escape_html(&company.email),
        escape_html(&company.address)
    )?;
    write!(
        html,
        "</div><div class=\"ref\"><div>Reference</div><div class=\"number\">{}</div><div>{}</div></div></header>",
        escape_html(&budget.number),
        profile.format_date(budget.date.date_naive())
    )?;
    Ok(())
}

fn write_client(html: &mut String, budget: &Budget, profile: &CountryProfile) -> Result<(), DocumentError> {
    let client = &budget.client;
    write!(
        html,
        "<section class=\"client\"><div><strong>{}</strong><br>{}: {}<br>{}",
        escape_html(&client.name),
        escape_html(profile.tax_id_label),
        escape_html(&client.nif),
        escape_html(&client.address)
    )?;
    if !client.contact_name.is_empty() {
        write!(html, "<br>Attn: {}", escape_html(&client.contact_name))?;
    }
    let validity = budget
        .valid_until
        .map_or_else(|| DEFAULT_VALIDITY.to_string(), |day| profile.format_date(day));
    write!(
        html,
        "</div><div class=\"num\">Valid until<br><strong>{}</strong></div></section>",
        escape_html(&validity)
    )?;
    Ok(())
}

fn write_items(html: &mut String, budget: &Budget, profile: &CountryProfile) -> Result<(), DocumentError> {
    html.push_str(
        "<table><thead><tr><th>Description</th><th>Specialty</th><th class=\"num\">Qty</th>\
         <th class=\"num\">Unit price</th><th class=\"num\">Amount</th></tr></thead><tbody>",
    );
    for item in &budget.items {
        write!(
            html,
            "<tr><td>{}</td><td>{}</td><td class=\"num\">{} {}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>",
            escape_html(&item.description),
            escape_html(item.category.label()),
            format_quantity(item.quantity),
            escape_html(&item.unit),
            profile.format_amount(item.price_per_unit),
            profile.format_amount(line_total(item.quantity, item.price_per_unit))
        )?;
    }
    html.push_str("</tbody></table>");
    Ok(())
}

fn format_quantity(quantity: Decimal) -> String {
    quantity.normalize().to_string()
}

/// Code printed on the document to identify it: `AT-<budget>-<company>`.
#[must_use]
pub fn authentication_code(budget: &Budget) -> String {
    let budget_id = budget.id.to_string();
    let company_id = budget.company_id.to_string();
    format!(
        "AT-{}-{}",
        budget_id.chars().take(6).collect::<String>(),
        company_id.chars().take(4).collect::<String>()
    )
    .to_uppercase()
}

/// Escapes text for use in HTML content and attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
