use leptos::prelude::*;

use crate::app::PageContext;
use crate::state::FormField;

#[component]
fn TextField(
    field: FormField,
    /// Visible label; required fields get a trailing asterisk
    #[prop(into)]
    label: String,
    #[prop(into)] input_type: String,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let id = format!("contact-{}", field);
    let label = if field.is_required() {
        format!("{} *", label)
    } else {
        label
    };

    view! {
        <div class="form-group">
            <label for=id.clone()>{label}</label>
            <input
                id=id
                name=field.to_string()
                type=input_type
                placeholder=placeholder
                class="input"
                prop:value=move || ctx.field(field)
                on:input=move |ev| ctx.set_field(field, event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let submitting = move || ctx.state.with(|s| s.ui.submitting);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form class="contact-form" on:submit=on_submit novalidate=true>
            <div class="form-row">
                <TextField field=FormField::Name label="Nom" input_type="text" placeholder="Votre nom" />
                <TextField field=FormField::Email label="Courriel" input_type="email" placeholder="vous@entreprise.com" />
            </div>
            <TextField field=FormField::Company label="Entreprise" input_type="text" placeholder="Votre entreprise (facultatif)" />
            <div class="form-group">
                <label for="contact-message">"Message *"</label>
                <textarea
                    id="contact-message"
                    name="message"
                    rows="5"
                    class="input"
                    placeholder="Décrivez votre projet"
                    prop:value=move || ctx.field(FormField::Message)
                    on:input=move |ev| ctx.set_field(FormField::Message, event_target_value(&ev))
                ></textarea>
            </div>
            <button type="submit" class="btn btn-primary btn-block" disabled=submitting>
                {move || if submitting() { "Envoi en cours..." } else { "Envoyer le message" }}
            </button>
        </form>
    }
}
