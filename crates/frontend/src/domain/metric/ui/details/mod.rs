pub mod validation;
pub mod view_model;

use self::validation::FieldId;
use self::view_model::MetricFormViewModel;
use crate::domain::metric::actions::MetricAction;
use crate::domain::metric::api;
use crate::shared::api_utils::DashboardConfig;
use crate::shared::components::loading_overlay::use_loading_overlay;
use crate::shared::notifications::use_notifications;
use crate::system::auth::context::use_auth;
use contracts::domain::metric::MetricCategory;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn field_class(vm: MetricFormViewModel, field: FieldId) -> impl Fn() -> &'static str {
    move || {
        if vm.errors.with(|e| e.get(field).is_some()) {
            "error"
        } else {
            ""
        }
    }
}

#[component]
fn FieldError(vm: MetricFormViewModel, field: FieldId) -> impl IntoView {
    view! {
        <span class="field-error" id=format!("{}Error", field.dom_id())>
            {move || vm.error_for(field).unwrap_or_default()}
        </span>
    }
}

/// Форма "Nova métrica"; `on_created` вызывается после того, как бэкенд принял запись
#[component]
pub fn MetricEntryForm(on_created: Callback<()>) -> impl IntoView {
    let vm = MetricFormViewModel::new();
    let auth = use_auth();
    let notifications = use_notifications();
    let overlay = use_loading_overlay();
    let config = use_context::<DashboardConfig>().expect("DashboardConfig not found");

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(request) = vm.prepare_submit() else {
            notifications.error("Por favor, corrija os erros no formulário");
            return;
        };

        let api_base = config.api_base.clone();
        let authorization = auth.authorization();
        vm.submitting.set(true);
        overlay.begin();

        spawn_local(async move {
            let result = api::create_metric(&api_base, authorization.as_deref(), &request).await;
            match &result {
                Ok(metric) => {
                    log::info!("Metric {} created", metric.id);
                    vm.reset();
                    on_created.run(());
                }
                Err(e) => log::error!("Failed to create metric: {}", e),
            }
            MetricAction::Create
                .notice_for(&result)
                .present(&notifications, &auth);
            vm.submitting.set(false);
            overlay.end();
        });
    };

    view! {
        <form class="metric-form" on:submit=on_submit novalidate>
            <div class="form-group">
                <label for="name">"Nome *"</label>
                <input
                    type="text"
                    id="name"
                    class=field_class(vm, FieldId::Name)
                    placeholder="Ex: Vendas Q1"
                    prop:value=move || vm.form.with(|f| f.name.clone())
                    on:input=move |ev| vm.on_input(FieldId::Name, event_target_value(&ev))
                    on:blur=move |_| vm.on_blur(FieldId::Name)
                />
                <FieldError vm=vm field=FieldId::Name />
            </div>

            <div class="form-group">
                <label for="category">"Categoria *"</label>
                <select
                    id="category"
                    class=field_class(vm, FieldId::Category)
                    prop:value=move || vm.form.with(|f| f.category.clone())
                    on:change=move |ev| vm.on_input(FieldId::Category, event_target_value(&ev))
                    on:blur=move |_| vm.on_blur(FieldId::Category)
                >
                    <option value="">"Selecione..."</option>
                    {MetricCategory::ALL
                        .iter()
                        .map(|c| view! { <option value=c.as_str()>{c.as_str()}</option> })
                        .collect_view()}
                </select>
                <FieldError vm=vm field=FieldId::Category />
            </div>

            <div class="form-group">
                <label for="value">"Valor *"</label>
                <input
                    type="number"
                    id="value"
                    step="0.01"
                    min="0"
                    class=field_class(vm, FieldId::Value)
                    prop:value=move || vm.form.with(|f| f.value.clone())
                    on:input=move |ev| vm.on_input(FieldId::Value, event_target_value(&ev))
                    on:blur=move |_| vm.on_blur(FieldId::Value)
                />
                <FieldError vm=vm field=FieldId::Value />
            </div>

            <div class="form-group">
                <label for="color">"Cor"</label>
                <input
                    type="color"
                    id="color"
                    prop:value=move || vm.form.with(|f| f.color.clone())
                    on:input=move |ev| vm.on_input(FieldId::Color, event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="description">"Descrição"</label>
                <textarea
                    id="description"
                    rows="3"
                    prop:value=move || vm.form.with(|f| f.description.clone())
                    on:input=move |ev| vm.on_input(FieldId::Description, event_target_value(&ev))
                ></textarea>
                <small class="char-count">
                    <span id="descriptionCount">{move || vm.description_len()}</span>
                    " caracteres"
                </small>
            </div>

            <button type="submit" id="submitBtn" class="btn-primary" disabled=move || vm.submitting.get()>
                {move || if vm.submitting.get() { "Salvando..." } else { "Adicionar Métrica" }}
            </button>
        </form>
    }
}
