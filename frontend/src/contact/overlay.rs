use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::SUCCESS_OVERLAY_MS;

#[derive(Properties, PartialEq)]
pub struct SuccessOverlayProps {
    pub on_close: Callback<()>,
}

/// Full-screen confirmation shown after a consultation request goes out.
/// Closes itself after `SUCCESS_OVERLAY_MS` unless dismissed first.
#[function_component(SuccessOverlay)]
pub fn success_overlay(props: &SuccessOverlayProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(SUCCESS_OVERLAY_MS, move || on_close.emit(()));
                move || drop(timeout)
            },
            (),
        );
    }

    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="success-message">
            <style>
                {r#"
                    .success-message {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        background: rgba(0, 0, 0, 0.8);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 9999;
                        animation: fadeIn 0.3s ease-out;
                    }
                    .success-content {
                        background: white;
                        padding: 40px;
                        border-radius: 20px;
                        text-align: center;
                        max-width: 400px;
                        box-shadow: 0 20px 40px rgba(0,0,0,0.2);
                        animation: slideInUp 0.5s ease-out;
                    }
                    .success-icon {
                        font-size: 4rem;
                        color: #4caf50;
                        margin-bottom: 20px;
                    }
                    .success-content h3 {
                        font-size: 2rem;
                        font-weight: 700;
                        margin-bottom: 10px;
                        color: #1d1d1f;
                    }
                    .success-content p {
                        font-size: 1.4rem;
                        color: #666;
                        margin-bottom: 24px;
                    }
                    .success-btn {
                        background: var(--gradient-primary);
                        color: white;
                        padding: 12px 32px;
                        border: none;
                        border-radius: 25px;
                        font-size: 1.5rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: transform 0.2s ease;
                    }
                    .success-btn:hover {
                        transform: translateY(-2px);
                    }
                    @keyframes fadeIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    @keyframes slideInUp {
                        from { opacity: 0; transform: translateY(30px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                "#}
            </style>
            <div class="success-content">
                <div class="success-icon">{"✔"}</div>
                <h3>{"상담 신청이 완료되었습니다!"}</h3>
                <p>{"30분 내에 담당자가 연락드리겠습니다."}</p>
                <button class="success-btn" {onclick}>{"확인"}</button>
            </div>
        </div>
    }
}
