//! Reputation manager: review cards with one-shot AI assessment.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement};

use crate::dom_utils::{create, create_text, ensure_styles, on_click};
use crate::models::Sentiment;
use crate::messages::Message;
use crate::state::{dispatch_global_message, AppState};

pub fn render(document: &Document, root: &Element, state: &AppState) -> Result<(), JsValue> {
    ensure_styles(document, "reputation-styles", REPUTATION_CSS);

    root.append_child(&create_text(document, "h2", "screen-title", "Gestion de Réputation")?.into())?;
    root.append_child(&create_text(
        document,
        "p",
        "screen-subtitle",
        "Analysez le sentiment de vos clients et répondez automatiquement grâce à l'IA.",
    )?.into())?;

    for review in &state.reputation.reviews {
        let card = create(document, "div", "card review-card")?;

        // Author line with stars and the sentiment badge once assessed.
        let head = create(document, "div", "review-head")?;
        let who = create(document, "div", "review-who")?;
        who.append_child(&create_text(
            document,
            "span",
            "review-avatar",
            &review.author.chars().next().map(String::from).unwrap_or_default(),
        )?.into())?;
        let id_box = create(document, "div", "")?;
        id_box.append_child(&create_text(document, "h4", "", &review.author)?.into())?;
        let stars: String = (0..5)
            .map(|i| if i < review.rating { '★' } else { '☆' })
            .collect();
        id_box.append_child(&create_text(
            document,
            "span",
            "review-meta",
            &format!("{} • {}", review.date, stars),
        )?.into())?;
        who.append_child(&id_box)?;
        head.append_child(&who)?;

        if let Some(sentiment) = review.sentiment {
            head.append_child(&create_text(
                document,
                "span",
                sentiment_class(sentiment),
                sentiment.label(),
            )?.into())?;
        }
        card.append_child(&head)?;

        card.append_child(&create_text(
            document,
            "p",
            "review-text",
            &format!("\u{201c}{}\u{201d}", review.text),
        )?.into())?;

        match &review.response {
            Some(response) => {
                let reply_box = create(document, "div", "review-reply")?;
                reply_box.append_child(&create_text(
                    document,
                    "div",
                    "review-reply-title",
                    "Réponse proposée",
                )?.into())?;
                reply_box.append_child(&create_text(document, "p", "", response)?.into())?;
                card.append_child(&reply_box)?;
            }
            None => {
                let busy = state.reputation.loading_id.as_deref() == Some(review.id.as_str());
                let label = if busy {
                    "Analyse en cours..."
                } else {
                    "Générer une réponse IA"
                };
                let button = create_text(document, "button", "primary-button", label)?;
                if let Some(b) = button.dyn_ref::<HtmlButtonElement>() {
                    b.set_disabled(state.reputation.loading_id.is_some());
                }
                let id = review.id.clone();
                on_click(&button, move || {
                    dispatch_global_message(Message::GenerateReviewReply(id.clone()))
                })?;
                card.append_child(&button)?;
            }
        }

        root.append_child(&card)?;
    }

    Ok(())
}

fn sentiment_class(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "sentiment-pill positive",
        Sentiment::Neutral => "sentiment-pill neutral",
        Sentiment::Negative => "sentiment-pill negative",
    }
}

const REPUTATION_CSS: &str = "
.review-head{display:flex;justify-content:space-between;align-items:flex-start;margin-bottom:10px}
.review-who{display:flex;gap:12px;align-items:center}
.review-avatar{width:40px;height:40px;border-radius:50%;background:#e0e7ff;color:#4338ca;font-weight:700;display:flex;align-items:center;justify-content:center}
.review-meta{font-size:12px;color:#94a3b8}
.review-text{color:#334155;font-size:14px;line-height:1.6;margin-bottom:12px}
.review-reply{background:#f8fafc;border-left:3px solid #4f46e5;border-radius:8px;padding:12px;font-size:13px;color:#475569}
.review-reply-title{font-weight:700;color:#4338ca;margin-bottom:6px;font-size:12px;text-transform:uppercase}
.sentiment-pill{font-size:11px;font-weight:600;border-radius:999px;padding:3px 10px;text-transform:capitalize}
.sentiment-pill.positive{background:#dcfce7;color:#15803d}
.sentiment-pill.neutral{background:#fef9c3;color:#a16207}
.sentiment-pill.negative{background:#fee2e2;color:#b91c1c}
";
