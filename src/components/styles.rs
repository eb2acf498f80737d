//! Page stylesheet, injected once into `<head>`.

use wasm_bindgen::JsValue;
use web_sys::Document;

const STYLE_ELEMENT_ID: &str = "storefront-styles";

fn stylesheet() -> String {
    let lime = css_var!(brand_lime);
    let green = css_var!(brand_green);
    let ink = css_var!(ink);
    format!(
        "
:root{{--brand_lime:rgba(195,254,121,1);--brand_green:#16a34a;--ink:#111;--muted:#9ca3af}}
body{{margin:0;font-family:Arial,Helvetica,sans-serif;color:{ink}}}
.hidden{{display:none!important}}
.gradient-bg{{background:linear-gradient(to right,{lime},#fff);min-height:100vh}}
.pill-button{{border:1px solid {green};color:{green};background:#fff;padding:12px 24px;border-radius:12px;font-weight:600;cursor:pointer}}
.primary-button{{width:100%;background:{green};color:#fff;border:0;padding:10px;border-radius:6px;cursor:pointer}}
.landing{{min-height:100vh;display:flex;flex-direction:column;justify-content:space-between}}
.landing-body{{display:flex;flex:1}}
.landing-copy{{flex:1;display:flex;flex-direction:column;justify-content:center;padding:64px 40px}}
.landing-copy h1{{font-size:3rem;margin:0 0 24px}}
.landing-divider{{width:100px;background:{lime};display:flex;align-items:center;justify-content:center}}
.landing-visual{{flex:1;margin:24px}}
.landing-visual img{{width:100%;height:100%;object-fit:cover;border-radius:16px 0 0 16px}}
.landing-footer{{background:#f7f7f7;padding:16px;text-align:center;font-size:.875rem}}
.signup{{display:flex;align-items:center;justify-content:center;background:{lime};min-height:100vh;position:relative}}
.signup-logo{{position:absolute;top:16px;left:16px;padding:8px;background:#fff;border-radius:50%}}
.signup-card{{background:#fff;padding:32px;border-radius:12px;box-shadow:0 10px 15px rgba(0,0,0,.1);width:100%;max-width:28rem}}
.signup-card h1{{text-align:center;color:#15803d}}
.social-row{{display:flex;gap:16px;margin:24px 0 32px}}
.social-button{{display:flex;gap:12px;align-items:center;border:2px solid #d1d5db;background:#fff;padding:8px 16px;border-radius:8px}}
.form-field{{margin-bottom:16px}}
.form-field label{{display:block;margin-bottom:8px}}
.form-field input{{width:100%;box-sizing:border-box;padding:10px;border:1px solid #d1d5db;border-radius:8px}}
.top-bar{{display:flex;align-items:center;justify-content:space-between;padding:16px 24px;gap:16px;flex-wrap:wrap}}
.search-box{{flex:1;max-width:32rem;background:#fff;border-radius:6px;padding:8px 16px}}
.search-box input{{width:100%;border:0;outline:none}}
.cart-badge{{background:#fff;color:{green};padding:8px 12px;border-radius:999px;font-weight:600}}
.add-toggle{{font-size:1.75rem;color:#15803d;background:none;border:0;cursor:pointer}}
.merchant-body{{display:flex;flex-wrap:wrap}}
.profile-sidebar{{width:16rem;padding:24px;text-align:center}}
.profile-sidebar img{{width:128px;height:128px;border-radius:50%;object-fit:cover}}
.catalog{{flex:1;padding:24px}}
.confirmation-banner{{color:{green};text-align:center;margin-bottom:16px}}
.product-grid{{display:grid;grid-template-columns:repeat(auto-fill,minmax(220px,1fr));gap:24px}}
.product-card{{display:flex;flex-direction:column;gap:8px;transition:transform .2s}}
.product-card:hover{{transform:scale(1.05)}}
.product-image{{width:100%;height:12rem;overflow:hidden;border-radius:8px}}
.product-image img{{width:100%;height:100%;object-fit:cover}}
.product-price{{font-size:1.25rem;font-weight:700}}
.product-rating{{font-size:1.75rem}}
.star-filled{{color:#eab308}}
.star-dim{{color:var(--muted)}}
.add-to-cart{{align-self:flex-start;padding:8px 24px;background:#22c55e;border:1px solid #000;border-radius:4px}}
.modal{{position:fixed;inset:0;display:flex;align-items:center;justify-content:center;backdrop-filter:blur(4px);z-index:50}}
.modal-content{{background:#fff;padding:24px;border-radius:8px;width:24rem;box-shadow:0 10px 15px rgba(0,0,0,.1)}}
.modal-header{{display:flex;justify-content:space-between}}
.modal-close{{background:none;border:0;font-size:1.5rem;color:#6b7280;cursor:pointer}}
"
    )
}

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }

    let style = document.create_element("style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(&stylesheet()));

    match document.head() {
        Some(head) => head.append_child(&style)?,
        None => document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?
            .append_child(&style)?,
    };
    Ok(())
}
