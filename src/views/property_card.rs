// ============================================================================
// PROPERTY CARD
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::models::Property;

pub fn render_property_card(property: &Property) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?
        .class("property-card")
        .attr("data-property-id", &property.id.to_string())?
        .build();

    // Picture + website link
    let media = ElementBuilder::new("div")?
        .class("property-media")
        .build();
    if !property.website_image.is_empty() {
        let image = ElementBuilder::new("img")?
            .attr("src", &property.website_image)?
            .attr("alt", &property.property_name)?
            .build();
        append_child(&media, &image)?;
    }
    if !property.website.is_empty() {
        let link = ElementBuilder::new("a")?
            .class("property-website")
            .attr("href", &property.website)?
            .attr("target", "_blank")?
            .attr("rel", "noopener noreferrer")?
            .text(&property.website)
            .build();
        append_child(&media, &link)?;
    }

    let title = ElementBuilder::new("div")?
        .class("property-title")
        .child(ElementBuilder::new("h2")?.text(&property.property_name).build())?
        .child(
            ElementBuilder::new("p")?
                .class("property-code")
                .text(&format!("Property code: {}", property.property_code))
                .build(),
        )?
        .build();

    let price = ElementBuilder::new("p")?
        .class("property-price")
        .text(&property.display_price())
        .build();

    let dates = ElementBuilder::new("div")?
        .class("property-dates")
        .child(labelled("p", "Check-in: ", &property.display_check_in())?)?
        .child(labelled("p", "Check-out: ", &property.display_check_out())?)?
        .build();

    let stats = ElementBuilder::new("div")?
        .class("property-stats")
        .build();
    let nights = property.nights.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string());
    for (label, value) in [
        ("Bedroom", property.bedrooms.to_string()),
        ("Nights", nights),
        ("Adults", property.adults.to_string()),
        ("Children", property.children.to_string()),
        ("Parking", property.parking.to_string()),
        ("Pets", property.pets.to_string()),
    ] {
        let stat = ElementBuilder::new("div")?
            .class("property-stat")
            .child(ElementBuilder::new("span")?.class("stat-label").text(label).build())?
            .child(ElementBuilder::new("span")?.class("stat-value").text(&value).build())?
            .build();
        append_child(&stats, &stat)?;
    }

    let details = ElementBuilder::new("div")?
        .class("property-details")
        .child(title)?
        .child(price)?
        .child(dates)?
        .child(stats)?
        .child(
            ElementBuilder::new("button")?
                .attr("type", "button")?
                .class("btn-select")
                .text("Select")
                .build(),
        )?
        .build();

    append_child(&card, &media)?;
    append_child(&card, &details)?;
    Ok(card)
}

fn labelled(tag: &str, label: &str, value: &str) -> Result<Element, JsValue> {
    ElementBuilder::new(tag)?
        .text(label)
        .child(ElementBuilder::new("span")?.class("value").text(value).build())
        .map(ElementBuilder::build)
}
