use yew::prelude::*;

use crate::animations::counter::StatCounter;
use crate::animations::progress::{ChartBar, ProcessStep, ProcessTimeline};
use crate::animations::scroll_effects::use_scroll_effects;
use crate::components::case_slider::{case_studies, CaseSlider};
use crate::components::floating_cta::FloatingCta;
use crate::contact::form::ContactForm;

fn process_steps() -> Vec<ProcessStep> {
    vec![
        ProcessStep {
            title: "무료 상담",
            description: "업체 현황과 자금 수요를 파악합니다.",
        },
        ProcessStep {
            title: "자금 진단",
            description: "받을 수 있는 정책자금과 한도를 분석합니다.",
        },
        ProcessStep {
            title: "서류 준비",
            description: "사업계획서와 신청 서류를 함께 준비합니다.",
        },
        ProcessStep {
            title: "승인 및 사후관리",
            description: "심사 대응부터 집행 이후까지 관리합니다.",
        },
    ]
}

#[function_component(Landing)]
pub fn landing() -> Html {
    use_scroll_effects();

    html! {
        <div class="landing-page">
            <div class="scroll-progress">
                <div class="scroll-progress-bar"></div>
            </div>

            <header id="hero" class="hero">
                <div class="hero-content">
                    <h1 class="reveal-text">{"기업 자금, 전문가와 함께 해결하세요"}</h1>
                    <p class="hero-subtitle fade-in-up">
                        {"정책자금부터 보증, 인증까지 시그넘파트너스가 처음부터 끝까지 함께합니다."}
                    </p>
                    <a href="#contact" class="hero-cta">{"무료 상담 신청"}</a>
                </div>
                <div class="hero-visual slide-in-right">
                    <img src="/assets/hero-visual.png" loading="lazy" alt="자금 컨설팅" />
                </div>
                <div class="scroll-indicator">
                    <span>{"SCROLL"}</span>
                </div>
            </header>

            <section id="stats" class="stats">
                <h2 class="section-title" data-aos="fade-up">{"숫자로 보는 성과"}</h2>
                <div class="stats-grid">
                    <StatCounter count="1280" suffix="건" label="누적 상담" />
                    <StatCounter count="4.5" suffix="억" label="평균 조달 금액" />
                    <StatCounter count="98" suffix="%" label="고객 만족도" />
                    <StatCounter count="12" suffix="년" label="컨설팅 경력" />
                </div>
            </section>

            <section id="results" class="results">
                <h2 class="section-title" data-aos="fade-up">{"업종별 승인률"}</h2>
                <div class="chart" data-aos="fade-up" data-aos-delay="200">
                    <ChartBar label="제조업" width={92} />
                    <ChartBar label="도소매업" width={85} />
                    <ChartBar label="IT/서비스업" width={88} />
                    <ChartBar label="요식업" width={76} />
                </div>
            </section>

            <ProcessTimeline steps={process_steps()} />

            <section id="cases" class="cases">
                <h2 class="section-title" data-aos="fade-up">{"성공 사례"}</h2>
                <CaseSlider cases={case_studies()} />
            </section>

            <section id="contact" class="contact">
                <div class="contact-intro slide-in-left">
                    <h2>{"무료 상담 신청"}</h2>
                    <p>{"남겨주시면 30분 내에 담당자가 연락드립니다."}</p>
                </div>
                <ContactForm />
            </section>

            <FloatingCta />
        </div>
    }
}
