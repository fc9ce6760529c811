use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::api::submit_consultation;
use crate::contact::overlay::SuccessOverlay;
use crate::contact::validation::{field_label, validate, ConsultationRequest};
use crate::utils::dom::alert;

pub enum FormAction {
    Set(&'static str, String),
    Consent(bool),
    Reset,
}

impl Reducible for ConsultationRequest {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Set(key, value) => next.set_value(key, value),
            FormAction::Consent(checked) => next.privacy = checked,
            FormAction::Reset => next = ConsultationRequest::default(),
        }
        next.into()
    }
}

const INDUSTRY_OPTIONS: &[(&str, &str)] = &[
    ("manufacturing", "제조업"),
    ("retail", "도소매업"),
    ("it", "IT/서비스업"),
    ("food", "요식업"),
    ("construction", "건설업"),
    ("other", "기타"),
];

const REVENUE_OPTIONS: &[(&str, &str)] = &[
    ("under1", "1억 미만"),
    ("1to5", "1억 ~ 5억"),
    ("5to10", "5억 ~ 10억"),
    ("10to50", "10억 ~ 50억"),
    ("over50", "50억 이상"),
];

const SOURCE_OPTIONS: &[(&str, &str)] = &[
    ("search", "검색"),
    ("referral", "지인 소개"),
    ("sns", "SNS"),
    ("ad", "광고"),
];

pub enum NoticeAction {
    Show,
    Close,
}

/// The success overlay on screen, if any. Every success issues a new key so a
/// later success remounts the overlay and restarts its dismiss timer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SuccessNotice {
    shown: Option<u32>,
    issued: u32,
}

impl SuccessNotice {
    pub fn key(&self) -> Option<u32> {
        self.shown
    }
}

impl Reducible for SuccessNotice {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            NoticeAction::Show => {
                let issued = self.issued.wrapping_add(1);
                SuccessNotice {
                    shown: Some(issued),
                    issued,
                }
            }
            NoticeAction::Close => SuccessNotice {
                shown: None,
                ..*self
            },
        };
        next.into()
    }
}

/// A `.form-group` is "focused" while its field has focus or holds a value.
pub fn group_is_focused(focused: Option<&str>, key: &str, value: &str) -> bool {
    focused == Some(key) || !value.is_empty()
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form = use_reducer(ConsultationRequest::default);
    let focused = use_state_eq(|| None::<&'static str>);
    let submitting = use_state_eq(|| false);
    let notice = use_reducer(SuccessNotice::default);

    let group_class = |key: &'static str| {
        let value = form.value(key).unwrap_or_default();
        classes!(
            "form-group",
            group_is_focused(*focused, key, value).then_some("focused")
        )
    };

    let onfocus = |key: &'static str| {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(Some(key)))
    };
    let onblur = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(None))
    };

    let oninput = |key: &'static str| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Set(key, input.value()));
        })
    };
    let onchange_select = |key: &'static str| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(FormAction::Set(key, select.value()));
        })
    };
    let oninput_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormAction::Set("message", textarea.value()));
        })
    };
    let onchange_consent = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let checkbox: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Consent(checkbox.checked()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let notice = notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let request = (*form).clone();
            if let Err(err) = validate(&request.to_fields()) {
                alert(&err.to_string());
                return;
            }

            submitting.set(true);
            let form = form.clone();
            let submitting = submitting.clone();
            let notice = notice.clone();
            spawn_local(async move {
                match submit_consultation(&request).await {
                    Ok(()) => {
                        notice.dispatch(NoticeAction::Show);
                        form.dispatch(FormAction::Reset);
                    }
                    Err(err) => {
                        gloo_console::error!("Consultation submit failed:", err.to_string());
                        alert("전송에 실패했습니다. 잠시 후 다시 시도해주세요.");
                    }
                }
                submitting.set(false);
            });
        })
    };

    let close_success = {
        let notice = notice.clone();
        Callback::from(move |_: ()| notice.dispatch(NoticeAction::Close))
    };

    let text_field = |key: &'static str, input_type: &'static str, placeholder: &'static str| {
        html! {
            <div class={group_class(key)}>
                <label for={key}>{field_label(key)}</label>
                <input
                    id={key}
                    name={key}
                    type={input_type}
                    placeholder={placeholder}
                    value={form.value(key).unwrap_or_default().to_string()}
                    oninput={oninput(key)}
                    onfocus={onfocus(key)}
                    onblur={onblur.clone()}
                />
            </div>
        }
    };

    let select_field = |key: &'static str, options: &'static [(&'static str, &'static str)]| {
        let current = form.value(key).unwrap_or_default().to_string();
        html! {
            <div class={group_class(key)}>
                <label for={key}>{field_label(key)}</label>
                <select
                    id={key}
                    name={key}
                    onchange={onchange_select(key)}
                    onfocus={onfocus(key)}
                    onblur={onblur.clone()}
                >
                    <option value="" selected={current.is_empty()}>{"선택해주세요"}</option>
                    { for options.iter().map(|(value, label)| html! {
                        <option value={*value} selected={current == *value}>{*label}</option>
                    }) }
                </select>
            </div>
        }
    };

    html! {
        <>
            <form id="consultationForm" class="consultation-form" {onsubmit}>
                { text_field("company", "text", "업체명을 입력해주세요") }
                { text_field("name", "text", "대표자명을 입력해주세요") }
                { text_field("phone", "tel", "010-0000-0000") }
                { select_field("industry", INDUSTRY_OPTIONS) }
                { select_field("revenue", REVENUE_OPTIONS) }
                { select_field("source", SOURCE_OPTIONS) }
                <div class={group_class("message")}>
                    <label for="message">{"문의 내용"}</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="4"
                        value={form.message.clone()}
                        oninput={oninput_message}
                        onfocus={onfocus("message")}
                        onblur={onblur.clone()}
                    />
                </div>
                <label class="form-consent">
                    <input
                        type="checkbox"
                        name="privacy"
                        checked={form.privacy}
                        onchange={onchange_consent}
                    />
                    <span>{"개인정보 수집 및 이용에 동의합니다."}</span>
                </label>
                <button type="submit" class="form-submit" disabled={*submitting}>
                    {
                        if *submitting {
                            html! { <><i class="fas fa-spinner fa-spin"></i>{" 전송 중..."}</> }
                        } else {
                            html! { {"무료 상담 신청하기"} }
                        }
                    }
                </button>
            </form>
            {
                if let Some(key) = notice.key() {
                    html! { <SuccessOverlay key={key} on_close={close_success} /> }
                } else {
                    html! {}
                }
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_or_value_marks_group() {
        assert!(group_is_focused(Some("name"), "name", ""));
        assert!(group_is_focused(None, "name", "김대표"));
        assert!(!group_is_focused(None, "name", ""));
        assert!(!group_is_focused(Some("phone"), "name", ""));
    }

    #[test]
    fn reducer_sets_fields_and_resets() {
        let form = Rc::new(ConsultationRequest::default());
        let form = form.reduce(FormAction::Set("company", "시그넘상사".into()));
        let form = form.reduce(FormAction::Consent(true));
        assert_eq!(form.company, "시그넘상사");
        assert!(form.privacy);
        let form = form.reduce(FormAction::Reset);
        assert_eq!(*form, ConsultationRequest::default());
    }

    #[test]
    fn each_success_gets_a_fresh_overlay_key() {
        let notice = Rc::new(SuccessNotice::default());
        assert_eq!(notice.key(), None);
        let first = notice.reduce(NoticeAction::Show);
        let second = first.clone().reduce(NoticeAction::Show);
        assert!(first.key().is_some());
        assert!(second.key().is_some());
        assert_ne!(first.key(), second.key());
    }

    #[test]
    fn closing_hides_the_overlay_without_reusing_keys() {
        let notice = Rc::new(SuccessNotice::default()).reduce(NoticeAction::Show);
        let shown = notice.key();
        let notice = notice.reduce(NoticeAction::Close);
        assert_eq!(notice.key(), None);
        let notice = notice.reduce(NoticeAction::Show);
        assert_ne!(notice.key(), shown);
    }

    #[test]
    fn select_options_have_unique_values() {
        for options in [INDUSTRY_OPTIONS, REVENUE_OPTIONS, SOURCE_OPTIONS] {
            let mut values: Vec<&str> = options.iter().map(|(value, _)| *value).collect();
            values.sort_unstable();
            values.dedup();
            assert_eq!(values.len(), options.len());
        }
    }
}
