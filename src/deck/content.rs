//! The eighteen slides of the maintenance-system briefing.
//!
//! Every slide is a pure function of the theme, the asset directories and the canvas, so slides can be
//! built in any order and on any thread. Repeated cards iterate the record tables below; the
//! same tables drive [`icon_jobs`], so a card never refers to an icon that is not generated.

use std::path::PathBuf;

use crate::{
    assets::{cache::AssetDir, icon::IconDescriptor},
    config::Theme,
    deck::LayoutKind,
    foundation::{
        core::{BBox, Rgb},
        error::DeckResult,
    },
    layout::{column_x, grid_cell},
    slide::{Cell, DEFAULT_CANVAS, Shadow, ShapeKind, ShapeStyle, Slide, SlideBuilder, TextStyle},
};

/// Edge length of every generated icon, in pixels.
pub const ICON_PX: i64 = 64;

/// File name of the architecture diagram bitmap.
pub const ARCHITECTURE_DIAGRAM: &str = "system_architecture";
/// File name of the process-flow diagram bitmap.
pub const PROCESS_FLOW_DIAGRAM: &str = "process_flow";

const COMPANY: &str = "동국시스템즈";

const FOOTER_GRAY: Rgb = Rgb::new(0xAA, 0xAA, 0xAA);
const CARD_LINE: Rgb = Rgb::new(0xE8, 0xE8, 0xE8);
const PAIN_FILL: Rgb = Rgb::new(0xFF, 0xF5, 0xF5);
const BAR_BEFORE: Rgb = Rgb::new(0xB0, 0xBE, 0xC5);
const BAR_GROWTH: Rgb = Rgb::new(0x00, 0xC8, 0x53);
const TINT_BLUE: Rgb = Rgb::new(0xE3, 0xF2, 0xFD);
const TINT_GREEN: Rgb = Rgb::new(0xE8, 0xF5, 0xE9);
const TINT_ORANGE: Rgb = Rgb::new(0xFF, 0xF3, 0xE0);
const TINT_PURPLE: Rgb = Rgb::new(0xF3, 0xE5, 0xF5);
const DELTA_DOWN: Rgb = Rgb::new(0x15, 0x65, 0xC0);
const DELTA_UP: Rgb = Rgb::new(0x2E, 0x7D, 0x32);

/// Where slides look for pictures.
#[derive(Clone, Debug)]
pub struct SlideAssets {
    /// Generated icons.
    pub icons: AssetDir,
    /// Generated diagrams.
    pub diagrams: AssetDir,
    /// Pre-rendered screenshots, read only.
    pub screenshots: AssetDir,
}

impl SlideAssets {
    /// Path an icon would have; existence is checked when placing it.
    pub fn icon(&self, file: &str) -> PathBuf {
        self.icons.root().join(file)
    }

    /// Path of the PNG for diagram `name`.
    pub fn diagram(&self, name: &str) -> PathBuf {
        self.diagrams.root().join(format!("{name}.png"))
    }

    /// Path of a screenshot by exact file name.
    pub fn screenshot(&self, file: &str) -> PathBuf {
        self.screenshots.root().join(file)
    }
}

/// Theme color a record refers to by role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Navy,
    Red,
    Green,
    Orange,
    Blue,
    Purple,
    Slate,
    Gold,
    Notify,
    White,
}

impl Accent {
    /// Concrete color under `theme`.
    pub fn resolve(self, theme: &Theme) -> Rgb {
        match self {
            Self::Navy => theme.navy,
            Self::Red => theme.red,
            Self::Green => theme.green,
            Self::Orange => theme.orange,
            Self::Blue => theme.blue,
            Self::Purple => theme.purple,
            Self::Slate => theme.slate,
            Self::Gold => theme.gold,
            Self::Notify => theme.notify,
            Self::White => Rgb::WHITE,
        }
    }
}

/// An icon as a slide uses it: glyph, tint, and the file it is written to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconRef {
    pub id: &'static str,
    pub tint: Accent,
    pub file: &'static str,
}

impl IconRef {
    const fn new(id: &'static str, tint: Accent, file: &'static str) -> Self {
        Self { id, tint, file }
    }

    /// Descriptor that produces this icon at [`ICON_PX`].
    pub fn descriptor(self, theme: &Theme) -> DeckResult<IconDescriptor> {
        IconDescriptor::with_tint(self.id, self.tint.resolve(theme), ICON_PX, self.file)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TocItem {
    pub number: &'static str,
    pub title: &'static str,
    pub pages: &'static str,
}

/// Overview card with an accent stripe.
#[derive(Clone, Copy, Debug)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
    pub icon: IconRef,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    High,
    Medium,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Self::High => "높음",
            Self::Medium => "중간",
        }
    }

    fn accent(self) -> Accent {
        match self {
            Self::High => Accent::Red,
            Self::Medium => Accent::Orange,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ProblemRow {
    pub problem: &'static str,
    pub impact: &'static str,
    pub severity: Severity,
}

/// Stakeholder card: who suffers and how.
#[derive(Clone, Copy, Debug)]
pub struct Persona {
    pub name: &'static str,
    pub pains: &'static str,
    pub backdrop: Rgb,
    pub accent: Accent,
    pub icon: IconRef,
}

#[derive(Clone, Copy, Debug)]
pub struct MobileFeature {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconRef,
}

#[derive(Clone, Copy, Debug)]
pub struct WebFeature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconRef,
}

/// One screenshot with its caption.
#[derive(Clone, Copy, Debug)]
pub struct ScreenShot {
    pub file: &'static str,
    pub caption: &'static str,
}

/// A slide of three screenshots.
#[derive(Clone, Copy, Debug)]
pub struct ScreenSet {
    pub title: &'static str,
    pub action: &'static str,
    pub screens: [ScreenShot; 3],
}

#[derive(Clone, Copy, Debug)]
pub struct RoleRow {
    pub role: &'static str,
    pub functions: &'static str,
    pub channel: &'static str,
}

/// Before/after metric. `reduction` is true when smaller is better.
#[derive(Clone, Copy, Debug)]
pub struct Kpi {
    pub name: &'static str,
    pub before: &'static str,
    pub after: &'static str,
    pub delta: &'static str,
    pub reduction: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct Benefit {
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
    pub icon: IconRef,
}

/// A row of the schedule: badge, span bar, and task list.
#[derive(Clone, Copy, Debug)]
pub struct Phase {
    pub badge: &'static str,
    pub accent: Accent,
    pub badge_y: f64,
    pub span: BBox,
    pub span_label: &'static str,
    pub heading: &'static str,
    pub detail_x: f64,
    pub tasks: &'static str,
}

pub const TOC: [TocItem; 7] = [
    TocItem { number: "01", title: "프로젝트 개요", pages: "03" },
    TocItem { number: "02", title: "현황 및 문제점", pages: "04-05" },
    TocItem { number: "03", title: "시스템 구성", pages: "06" },
    TocItem { number: "04", title: "핵심 기능 및 주요 화면", pages: "07-12" },
    TocItem { number: "05", title: "업무 프로세스", pages: "13-14" },
    TocItem { number: "06", title: "기대 효과", pages: "15-16" },
    TocItem { number: "07", title: "추진 일정", pages: "17" },
];

pub const FEATURES: [FeatureCard; 4] = [
    FeatureCard {
        title: "QR코드 기반",
        description: "현장 스캔으로 즉시 고장신고",
        accent: Accent::Navy,
        icon: IconRef::new("qrCode", Accent::Navy, "qr_code.png"),
    },
    FeatureCard {
        title: "실시간 추적",
        description: "요청→승인→수리→완료 전 과정",
        accent: Accent::Red,
        icon: IconRef::new("sync", Accent::Red, "sync.png"),
    },
    FeatureCard {
        title: "데이터 기반",
        description: "고장 통계 및 정비 이력 분석",
        accent: Accent::Slate,
        icon: IconRef::new("analytics", Accent::Slate, "analytics.png"),
    },
    FeatureCard {
        title: "자동 알림",
        description: "카카오톡 실시간 통보",
        accent: Accent::Gold,
        icon: IconRef::new("notifications", Accent::Gold, "notifications.png"),
    },
];

pub const PROBLEMS: [ProblemRow; 4] = [
    ProblemRow {
        problem: "전화/구두 신고로 기록 누락",
        impact: "정비 이력 관리 불가",
        severity: Severity::High,
    },
    ProblemRow {
        problem: "수작업 대장 관리",
        impact: "실시간 현황 파악 불가",
        severity: Severity::High,
    },
    ProblemRow {
        problem: "담당자 연락 지연",
        impact: "수리 완료 시간 증가",
        severity: Severity::Medium,
    },
    ProblemRow {
        problem: "부품 재고 파악 어려움",
        impact: "긴급 구매 빈발",
        severity: Severity::Medium,
    },
];

pub const PERSONAS: [Persona; 4] = [
    Persona {
        name: "신고자",
        pains: "누구에게 연락?\n진행상황은?\n언제 수리?",
        backdrop: TINT_BLUE,
        accent: Accent::Blue,
        icon: IconRef::new("person", Accent::Blue, "person_blue.png"),
    },
    Persona {
        name: "승인권자",
        pains: "수많은 전화\n우선순위 판단 어려움",
        backdrop: TINT_GREEN,
        accent: Accent::Green,
        icon: IconRef::new("verifiedUser", Accent::Green, "approval_green.png"),
    },
    Persona {
        name: "정비담당자",
        pains: "현장 위치 파악 어려움\n정비이력 없음",
        backdrop: TINT_ORANGE,
        accent: Accent::Orange,
        icon: IconRef::new("build", Accent::Orange, "build_orange.png"),
    },
    Persona {
        name: "관리자",
        pains: "전체 현황 파악 불가\n통계 산출 불가",
        backdrop: TINT_PURPLE,
        accent: Accent::Purple,
        icon: IconRef::new("dashboard", Accent::Purple, "dashboard_purple.png"),
    },
];

pub const MOBILE_FEATURES: [MobileFeature; 4] = [
    MobileFeature {
        number: "01",
        title: "QR 스캔 신고",
        description: "설비 QR코드 스캔\n→ 자동 정보 입력",
        icon: IconRef::new("qrCodeScanner", Accent::Navy, "qr_scan.png"),
    },
    MobileFeature {
        number: "02",
        title: "고장 신고 등록",
        description: "고장유형, 내용\n사진, 긴급여부",
        icon: IconRef::new("edit", Accent::Navy, "edit.png"),
    },
    MobileFeature {
        number: "03",
        title: "승인/반려",
        description: "요청건 승인\n또는 반려 처리",
        icon: IconRef::new("checkCircle", Accent::Navy, "check.png"),
    },
    MobileFeature {
        number: "04",
        title: "수리 시작/완료",
        description: "현장 도착 후\nQR 스캔으로 작업",
        icon: IconRef::new("build", Accent::Navy, "build.png"),
    },
];

pub const WEB_FEATURES: [WebFeature; 4] = [
    WebFeature {
        title: "종합 상황판",
        description: "실시간 현황 모니터링",
        icon: IconRef::new("dashboard", Accent::White, "dashboard_white.png"),
    },
    WebFeature {
        title: "정비 현황 관리",
        description: "전체 요청 검색/조회",
        icon: IconRef::new("listAlt", Accent::White, "list_white.png"),
    },
    WebFeature {
        title: "설비별 이력 카드",
        description: "고장/수리 타임라인",
        icon: IconRef::new("history", Accent::White, "history_white.png"),
    },
    WebFeature {
        title: "기준정보 관리",
        description: "설비, 사용자, 업체",
        icon: IconRef::new("settings", Accent::White, "settings_white.png"),
    },
];

const fn shot(file: &'static str, caption: &'static str) -> ScreenShot {
    ScreenShot { file, caption }
}

pub const SCREEN_SETS: [ScreenSet; 4] = [
    ScreenSet {
        title: "4. 주요 화면 - 모바일 앱 (수리요청)",
        action: "QR코드 스캔부터 수리요청까지의 직관적인 사용자 경험을 제공합니다.",
        screens: [
            shot("MOB-LOG-001_로그인.png", "로그인"),
            shot("MOB-HOM-001_홈.png", "홈 화면"),
            shot("MOB-REQ-001_수리요청화면.png", "수리요청"),
        ],
    },
    ScreenSet {
        title: "4. 주요 화면 - 모바일 앱 (작업처리)",
        action: "정비업체가 사용하는 고장접수부터 수리완료까지의 작업 화면입니다.",
        screens: [
            shot("MOB-RCV-002_고장접수처리.png", "고장접수"),
            shot("MOB-STR-001_수리시작등록.png", "수리시작"),
            shot("MOB-END-001_수리완료등록.png", "수리완료"),
        ],
    },
    ScreenSet {
        title: "4. 주요 화면 - 웹 관리자 (대시보드)",
        action: "실시간 현황 파악과 정비이력 관리를 위한 관리자 화면입니다.",
        screens: [
            shot("WEB-DSH-001_정비현황조회_대시보드.png", "대시보드"),
            shot("WEB-WRK-001_정비진행조회처리.png", "정비 진행 조회"),
            shot("WEB-HIS-001_정비이력조회.png", "정비 이력 조회"),
        ],
    },
    ScreenSet {
        title: "4. 주요 화면 - 웹 관리자 (기준정보)",
        action: "시스템 운영을 위한 마스터 데이터 관리 화면입니다.",
        screens: [
            shot("WEB-EQP-001_공조설비정보관리.png", "설비 관리"),
            shot("WEB-USR-001_사용자관리.png", "사용자 관리"),
            shot("WEB-VND-001_유지보수업체정보관리.png", "업체 관리"),
        ],
    },
];

pub const ROLES: [RoleRow; 4] = [
    RoleRow {
        role: "생산현장 담당자",
        functions: "QR스캔, 수리요청, 진행확인",
        channel: "Mobile",
    },
    RoleRow {
        role: "설비팀 과장",
        functions: "승인/반려, 우선순위 확인",
        channel: "Mobile + Web",
    },
    RoleRow {
        role: "정비업체 기사",
        functions: "접수, 작업시작/완료",
        channel: "Mobile",
    },
    RoleRow {
        role: "설비관리 팀장",
        functions: "대시보드, 이력조회, 통계",
        channel: "Web",
    },
];

pub const KPIS: [Kpi; 4] = [
    Kpi {
        name: "평균 수리 완료 시간",
        before: "8시간",
        after: "4시간",
        delta: "-50%",
        reduction: true,
    },
    Kpi {
        name: "고장 신고 누락률",
        before: "15%",
        after: "0%",
        delta: "-100%",
        reduction: true,
    },
    Kpi {
        name: "정비 이력 추적률",
        before: "40%",
        after: "100%",
        delta: "+150%",
        reduction: false,
    },
    Kpi {
        name: "관계자 알림 도달률",
        before: "60%",
        after: "98%",
        delta: "+63%",
        reduction: false,
    },
];

pub const BENEFITS: [Benefit; 3] = [
    Benefit {
        title: "수기 대장 폐지",
        description: "종이 문서 사용\n완전 중단",
        accent: Accent::Red,
        icon: IconRef::new("cancel", Accent::White, "cancel_white.png"),
    },
    Benefit {
        title: "업무 가시성 확보",
        description: "정비 진행 현황\n실시간 파악",
        accent: Accent::Blue,
        icon: IconRef::new("visibility", Accent::White, "visibility_white.png"),
    },
    Benefit {
        title: "예방 정비 가능",
        description: "데이터 기반\n정비 계획 수립",
        accent: Accent::Green,
        icon: IconRef::new("eventAvailable", Accent::White, "event_white.png"),
    },
];

pub const PHASES: [Phase; 2] = [
    Phase {
        badge: "Phase 1\nMVP",
        accent: Accent::Navy,
        badge_y: 2.1,
        span: BBox::new(1.2, 2.2, 6.0, 0.5),
        span_label: "개발환경 / DB설계 / 백엔드 / 모바일 / 웹 / UAT",
        heading: "Phase 1 - MVP",
        detail_x: 0.6,
        tasks: "1-2주: 개발환경 구축, DB 설계\n3-4주: 백엔드 API 개발 (Core)\n5-6주: 모바일 앱 개발 (Core)\n7주: 웹 대시보드 개발\n8주: 통합테스트, UAT",
    },
    Phase {
        badge: "Phase 2\n고도화",
        accent: Accent::Red,
        badge_y: 2.9,
        span: BBox::new(6.7, 3.0, 3.0, 0.5),
        span_label: "마스터관리 / 리포트 / 안정화",
        heading: "Phase 2 - 고도화",
        detail_x: 5.3,
        tasks: "9-10주: 마스터 관리 기능\n11주: 리포트/Excel 출력\n12주: 성능 최적화, 안정화",
    },
];

const WEEKS: usize = 12;

/// Chat-bubble icon kept alongside the slide icons for notification material.
pub const KAKAO_ICON: IconRef = IconRef::new("kakao", Accent::Notify, "kakao.png");

/// Every icon the slides reference, plus the chat-bubble icon.
pub fn icon_jobs(theme: &Theme) -> DeckResult<Vec<IconDescriptor>> {
    FEATURES
        .iter()
        .map(|f| f.icon)
        .chain(PERSONAS.iter().map(|p| p.icon))
        .chain(MOBILE_FEATURES.iter().map(|f| f.icon))
        .chain(WEB_FEATURES.iter().map(|f| f.icon))
        .chain(BENEFITS.iter().map(|b| b.icon))
        .chain(std::iter::once(KAKAO_ICON))
        .map(|icon| icon.descriptor(theme))
        .collect()
}

/// Signature shared by every slide function.
pub type SlideFn = fn(&Theme, &SlideAssets, LayoutKind) -> Slide;

/// A named slide in presentation order.
#[derive(Clone, Copy)]
pub struct SlideSpec {
    /// Short identifier used in logs.
    pub name: &'static str,
    /// Builder.
    pub build: SlideFn,
}

impl std::fmt::Debug for SlideSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideSpec").field("name", &self.name).finish()
    }
}

/// The deck, in order.
pub const SLIDES: [SlideSpec; 18] = [
    SlideSpec { name: "title", build: title_slide },
    SlideSpec { name: "contents", build: contents_slide },
    SlideSpec { name: "overview", build: overview_slide },
    SlideSpec { name: "problems", build: problems_slide },
    SlideSpec { name: "personas", build: personas_slide },
    SlideSpec { name: "architecture", build: architecture_slide },
    SlideSpec { name: "mobile_features", build: mobile_features_slide },
    SlideSpec { name: "web_features", build: web_features_slide },
    SlideSpec { name: "screens_mobile_request", build: screens_mobile_request },
    SlideSpec { name: "screens_mobile_work", build: screens_mobile_work },
    SlideSpec { name: "screens_web_dashboard", build: screens_web_dashboard },
    SlideSpec { name: "screens_web_master", build: screens_web_master },
    SlideSpec { name: "process_flow", build: process_flow_slide },
    SlideSpec { name: "roles", build: roles_slide },
    SlideSpec { name: "kpis", build: kpi_slide },
    SlideSpec { name: "benefits", build: benefits_slide },
    SlideSpec { name: "schedule", build: schedule_slide },
    SlideSpec { name: "closing", build: closing_slide },
];

fn card_x(index: usize) -> f64 {
    column_x(0.6, index, 2.35)
}

// Distance of the footer line from the bottom edge.
const FOOTER_INSET: f64 = 0.525;

// Title and closing copy is laid out for a 5.625" canvas; taller canvases center it.
fn centering_offset(height: f64) -> f64 {
    ((height - DEFAULT_CANVAS.1) / 2.0).max(0.0)
}

fn icon_box(x: f64, y: f64) -> BBox {
    BBox::new(x, y, 0.6, 0.6)
}

pub fn title_slide(theme: &Theme, _assets: &SlideAssets, layout: LayoutKind) -> Slide {
    let mut b = SlideBuilder::with_canvas(theme, layout.size_inches());
    let (_, height) = b.canvas();
    let dy = centering_offset(height);
    b.background(theme.navy);
    b.text(
        BBox::new(0.5, 2.0 + dy, 9.0, 1.0),
        "공조설비 정보관리 시스템 구축",
        TextStyle::new(36.0, Rgb::WHITE).bold().center(),
    );
    b.text(
        BBox::new(0.5, 3.1 + dy, 9.0, 0.5),
        "사전 설명회 I 2025.12",
        TextStyle::new(18.0, theme.gold).center(),
    );
    b.rect(BBox::new(4.25, 3.7 + dy, 1.5, 0.06), ShapeStyle::filled(theme.red));
    b.text(
        BBox::new(7.5, height - FOOTER_INSET, 2.0, 0.3),
        COMPANY,
        TextStyle::new(10.0, FOOTER_GRAY).right(),
    );
    b.finish()
}

pub fn contents_slide(theme: &Theme, _assets: &SlideAssets, layout: LayoutKind) -> Slide {
    let mut b = SlideBuilder::with_canvas(theme, layout.size_inches());
    b.rect(BBox::new(0.0, 0.0, 10.0, 0.9), ShapeStyle::filled(theme.navy));
    b.text(
        BBox::new(0.5, 0.25, 9.0, 0.5),
        "목차",
        TextStyle::new(24.0, Rgb::WHITE).bold(),
    );
    for (i, item) in TOC.iter().enumerate() {
        let y = column_x(1.2, i, 0.55);
        b.text(
            BBox::new(0.8, y, 0.6, 0.45),
            item.number,
            TextStyle::new(22.0, theme.navy).bold(),
        );
        b.text(
            BBox::new(1.5, y, 6.5, 0.45),
            item.title,
            TextStyle::new(14.0, theme.text),
        );
        b.text(
            BBox::new(8.5, y, 0.7, 0.45),
            item.pages,
            TextStyle::new(11.0, theme.muted).right(),
        );
        if i + 1 < TOC.len() {
            b.rect(BBox::new(0.8, y + 0.48, 8.4, 0.01), ShapeStyle::filled(theme.line));
        }
    }
    b.finish()
}

pub fn overview_slide(theme: &Theme, assets: &SlideAssets, layout: LayoutKind) -> Slide {
    let mut b = SlideBuilder::with_canvas(theme, layout.size_inches());
    b.frame(
        "1. 프로젝트 개요",
        "공조설비 고장신고부터 수리완료까지 전 과정을 디지털화하는 설비 정비 관리 시스템입니다.",
    );
    for (i, card) in FEATURES.iter().enumerate() {
        let x = card_x(i);
        b.rect(
            BBox::new(x, 1.8, 2.1, 2.6),
            ShapeStyle::filled(Rgb::WHITE).with_shadow(Shadow::down(6.0, 2.0, 0.1)),
        );
        b.rect(
            BBox::new(x, 1.8, 0.06, 2.6),
            ShapeStyle::filled(card.accent.resolve(theme)),
        );
        b.image_or_placeholder(icon_box(x + 0.7, 2.0), &assets.icon(card.icon.file));
        b.text(
            BBox::new(x + 0.2, 2.7, 1.8, 0.35),
            card.title,
            TextStyle::new(13.0, theme.navy).bold(),
        );
        b.text(
            BBox::new(x + 0.2, 3.1, 1.8, 0.8),
            card.description,
            TextStyle::new(10.0, theme.gray),
        );
    }
    b.finish()
}

pub fn problems_slide(theme: &Theme, _assets: &SlideAssets, layout: LayoutKind) -> Slide {
    let mut b = SlideBuilder::with_canvas(theme, layout.size_inches());
    b.frame(
        "2. 현황 및 문제점",
        "전화/구두 신고로 인한 기록 누락과 수작업 대장 관리가 가장 큰 문제입니다.",
    );
    let rows = PROBLEMS
        .iter()
        .map(|row| {
            vec![
                Cell::plain(row.problem),
                Cell::plain(row.impact),
                Cell::emphasized(
                    row.severity.label(),
                    row.severity.accent().resolve(theme),
                    Rgb::WHITE,
                ),
            ]
        })
        .collect();
    b.table(
        BBox::new(0.6, 1.8, 8.8, 2.5),
        &[3.5, 3.5, 1.8],
        &["문제점", "영향", "심각도"],
        rows,
        11.0,
    );
    b.finish()
}

pub fn personas_slide(theme: &Theme, assets: &SlideAssets, layout: LayoutKind) -> Slide {
    let mut b = SlideBuilder::with_canvas(theme, layout.size_inches());
    b.frame(
        "2. 현황 및 문제점",
        "각 이해관계자별로 업무 수행에 어려움을 겪고 있습니다.",
    );
    for (i, persona) in PERSONAS.iter().enumerate() {
        let x = card_x(i);
        b.rect(
            BBox::new(x, 1.7, 2.1, 2.8),
            ShapeStyle::filled(Rgb::WHITE)
                .with_line(theme.line, 1.0)
                .with_shadow(Shadow::down(4.0, 1.0, 0.08)),
        );
        b.shape(
            ShapeKind::Oval,
            BBox::new(x + 0.65, 1.9, 0.8, 0.8),
            ShapeStyle::filled(persona.backdrop),
        );
        b.image_or_placeholder(icon_box(x + 0.75, 2.0), &assets.icon(persona.icon.file));
        b.text(
            BBox::new(x, 2.8, 2.1, 0.35),
            persona.name,
            TextStyle::new(12.0, persona.accent.resolve(theme)).bold().center(),
        );
        b.rect(BBox::new(x + 0.1, 3.2, 1.9, 1.1), ShapeStyle::filled(PAIN_FILL));
        b.rect(BBox::new(x + 0.1, 3.2, 0.05, 1.1), ShapeStyle::filled(theme.red));
        b.text(
            BBox::new(x + 0.2, 3.3, 1.7, 0.9),
            persona.pains,
            TextStyle::new(9.0, theme.red),
        );
    }
    b.finish()
}

pub fn architecture_slide(theme: &Theme, assets: &SlideAssets, layout: LayoutKind) -> Slide {
    let mut b = SlideBuilder::with_canvas(theme, layout.size_inches());
    b.frame(
        "3. 시스템 구성",
        "모바일 앱, 웹 관리자, 백엔드 서버 3개 컴포넌트로 구성됩니다.",
    );
    b.image_or_placeholder(
        BBox::new(0.5, 1.6, 9.0, 3.6),
        &assets.diagram(ARCHITECTURE_DIAGRAM),
    );
    b.finish()
}

pub fn mobile_features_slide(theme: &Theme, assets: &SlideAssets, layout: LayoutKind) -> Slide {
    let mut b = SlideBuilder::with_canvas(theme, layout.size_inches());
    b.frame(
        "4. 핵심 기능 - 모바일 앱",
        "QR스캔으로 설비를 인식하고, 고장신고부터 수리완료까지 전 과정을 처리합니다.",
    );
    for (i, feature) in MOBILE_FEATURES.iter().enumerate() {
        let x = card_x(i);
        b.rect(
            BBox::new(x, 1.7, 2.1, 2.6),
            ShapeStyle::filled(Rgb::WHITE)
                .with_line(CARD_LINE, 1.0)
                .with_shadow(Shadow::down(4.0, 1.0, 0.06)),
        );
        b.text(
            BBox::new(x, 1.8, 2.1, 0.4),
            feature.number,
            TextStyle::new(18.0, theme.line).bold(),
        );
        b.image_or_placeholder(icon_box(x + 0.75, 2.2), &assets.icon(feature.icon.file));
        b.text(
            BBox::new(x + 0.15, 2.9, 1.9, 0.35),
            feature.title,
            TextStyle::new(11.0, theme.navy).bold(),
        );
        b.text(
            BBox::new(x + 0.15, 3.3, 1.9, 0.8),
            feature.description,
            TextStyle::new(9.0, theme.gray),
        );
    }
    b.finish()
}

pub fn web_features_slide(theme: &Theme, assets: &SlideAssets, layout: LayoutKind) -> Slide {
    let mut b = SlideBuilder::with_canvas(theme, layout.size_inches());
    b.frame(
        "4. 핵심 기능 - 웹 관리자",
        "대시보드로 전체 현황을 파악하고, 설비별 이력과 기준정보를 관리합니다.",
    );
    for (i, feature) in WEB_FEATURES.iter().enumerate() {
        let x = card_x(i);
        b.shape(
            ShapeKind::Oval,
            BBox::new(x + 0.65, 1.9, 0.8, 0.8),
            ShapeStyle::filled(theme.green),
        );
        b.image_or_placeholder(icon_box(x + 0.75, 2.0), &assets.icon(feature.icon.file));
        b.text(
            BBox::new(x, 2.8, 2.1, 0.35),
            feature.title,
            TextStyle::new(11.0, theme.navy).bold().center(),
        );
        b.text(
            BBox::new(x, 3.15, 2.1, 0.35),
            feature.description,
            TextStyle::new(9.0, theme.gray).center(),
        );
    }
    b.finish()
}

/// Three screenshots side by side with captions below.
pub fn screens_slide(
    theme: &Theme,
    assets: &SlideAssets,
    layout: LayoutKind,
    set: &ScreenSet,
) -> Slide {
    let mut b = SlideBuilder::with_canvas(theme, layout.size_inches());
    b.frame(set.title, set.action);
    for (i, screen) in set.screens.iter().enumerate() {
        let cell = grid_cell(i, set.screens.len(), (0.8, 1.8), (2.4, 2.8), (0.6, 0.0));
        b.image_or_placeholder(cell, &assets.screenshot(screen.file));
        b.text(
            BBox::new(cell.x, 4.7, cell.w, 0.35),
            screen.caption,
            TextStyle::new(11.0, theme.navy).bold().center(),
        );
    }
    b.finish()
}

fn screens_mobile_request(theme: &Theme, assets: &SlideAssets, layout: LayoutKind) -> Slide {
    screens_slide(theme, assets, layout, &SCREEN_SETS[0])
}

fn screens_mobile_work(theme: &Theme, assets: &SlideAssets, layout: LayoutKind) -> Slide {
    screens_slide(theme, assets, layout, &SCREEN_SETS[1])
}

fn screens_web_dashboard(theme: &Theme, assets: &SlideAssets, layout: LayoutKind) -> Slide {
    screens_slide(theme, assets, layout, &SCREEN_SETS[2])
}

fn screens_web_master(theme: &Theme, assets: &SlideAssets, layout: LayoutKind) -> Slide {
    screens_slide(theme, assets, layout, &SCREEN_SETS[3])
}

pub fn process_flow_slide(theme: &Theme, assets: &SlideAssets, layout: LayoutKind) -> Slide {
    let mut b = SlideBuilder::with_canvas(theme, layout.size_inches());
    b.frame(
        "5. 업무 프로세스",
        "6단계 프로세스로 진행되며, 각 단계별 카카오톡 알림이 발송됩니다.",
    );
    b.image_or_placeholder(
        BBox::new(0.3, 1.5, 9.4, 3.2),
        &assets.diagram(PROCESS_FLOW_DIAGRAM),
    );
    b.finish()
}

pub fn roles_slide(theme: &Theme, _assets: &SlideAssets, layout: LayoutKind) -> Slide {
    let mut b = SlideBuilder::with_canvas(theme, layout.size_inches());
    b.frame("5. 업무 프로세스", "사용자 역할별 주요 기능과 접근 채널입니다.");
    let rows = ROLES
        .iter()
        .map(|r| vec![Cell::plain(r.role), Cell::plain(r.functions), Cell::plain(r.channel)])
        .collect();
    b.table(
        BBox::new(0.6, 1.8, 8.8, 2.2),
        &[2.5, 4.3, 2.0],
        &["역할", "주요 기능", "접근 채널"],
        rows,
        11.0,
    );
    b.finish()
}

pub fn kpi_slide(theme: &Theme, _assets: &SlideAssets, layout: LayoutKind) -> Slide {
    let mut b = SlideBuilder::with_canvas(theme, layout.size_inches());
    b.frame(
        "6. 기대 효과",
        "시스템 도입으로 수리 완료 시간 50% 단축, 신고 누락 제로화가 가능합니다.",
    );
    for (i, kpi) in KPIS.iter().enumerate() {
        let y = column_x(1.7, i, 0.85);
        let (after_w, after_fill, badge_fill, badge_ink) = if kpi.reduction {
            (1.0, theme.navy, TINT_BLUE, DELTA_DOWN)
        } else {
            (3.5, BAR_GROWTH, TINT_GREEN, DELTA_UP)
        };
        b.text(BBox::new(0.6, y, 2.5, 0.4), kpi.name, TextStyle::new(11.0, theme.text));
        b.rect(BBox::new(3.2, y + 0.05, 2.0, 0.3), ShapeStyle::filled(BAR_BEFORE));
        b.text(
            BBox::new(3.3, y, 1.8, 0.4),
            kpi.before,
            TextStyle::new(9.0, Rgb::WHITE),
        );
        b.rect(BBox::new(3.2, y + 0.4, after_w, 0.3), ShapeStyle::filled(after_fill));
        b.text(
            BBox::new(3.3, y + 0.35, 1.8, 0.4),
            kpi.after,
            TextStyle::new(9.0, Rgb::WHITE),
        );
        let badge = BBox::new(8.3, y + 0.15, 0.9, 0.5);
        b.shape(
            ShapeKind::RoundRect { radius: 0.1 },
            badge,
            ShapeStyle::filled(badge_fill),
        );
        b.text(
            badge,
            kpi.delta,
            TextStyle::new(10.0, badge_ink).bold().center().middle(),
        );
    }
    b.finish()
}

pub fn benefits_slide(theme: &Theme, assets: &SlideAssets, layout: LayoutKind) -> Slide {
    let mut b = SlideBuilder::with_canvas(theme, layout.size_inches());
    b.frame(
        "6. 기대 효과",
        "정성적 효과로 업무 가시성 확보와 예방 정비 계획 수립이 가능해집니다.",
    );
    for (i, benefit) in BENEFITS.iter().enumerate() {
        let x = column_x(1.0, i, 2.8);
        let accent = benefit.accent.resolve(theme);
        b.rect(
            BBox::new(x, 1.8, 2.4, 2.6),
            ShapeStyle::filled(Rgb::WHITE).with_shadow(Shadow::down(8.0, 3.0, 0.12)),
        );
        b.shape(
            ShapeKind::RoundRect { radius: 0.15 },
            BBox::new(x + 0.75, 2.1, 0.9, 0.9),
            ShapeStyle::filled(accent),
        );
        b.image_or_placeholder(icon_box(x + 0.9, 2.25), &assets.icon(benefit.icon.file));
        b.text(
            BBox::new(x, 3.2, 2.4, 0.35),
            benefit.title,
            TextStyle::new(14.0, theme.ink).bold().center(),
        );
        b.text(
            BBox::new(x, 3.6, 2.4, 0.5),
            benefit.description,
            TextStyle::new(10.0, theme.gray).center(),
        );
        b.rect(BBox::new(x, 4.25, 2.4, 0.05), ShapeStyle::filled(accent));
    }
    b.finish()
}

pub fn schedule_slide(theme: &Theme, _assets: &SlideAssets, layout: LayoutKind) -> Slide {
    let mut b = SlideBuilder::with_canvas(theme, layout.size_inches());
    b.frame(
        "7. 추진 일정",
        "Phase 1 MVP 8주, Phase 2 고도화 4주로 총 12주 소요 예정입니다.",
    );
    for week in 0..WEEKS {
        b.text(
            BBox::new(column_x(0.7, week, 0.75), 1.6, 0.7, 0.3),
            format!("{}주", week + 1),
            TextStyle::new(8.0, theme.gray).center(),
        );
    }
    b.rect(BBox::new(0.7, 1.9, 9.0, 0.02), ShapeStyle::filled(theme.line));

    let pill = ShapeKind::RoundRect { radius: 0.1 };
    let on_pill = |size| TextStyle::new(size, Rgb::WHITE).center().middle();
    for phase in &PHASES {
        let fill = ShapeStyle::filled(phase.accent.resolve(theme));
        b.shape(pill, BBox::new(0.3, phase.badge_y, 0.8, 0.7), fill);
        b.text(
            BBox::new(0.3, phase.badge_y + 0.05, 0.8, 0.65),
            phase.badge,
            on_pill(8.0),
        );
        b.shape(pill, phase.span, fill);
        b.text(phase.span, phase.span_label, on_pill(9.0));
    }
    for phase in &PHASES {
        b.text(
            BBox::new(phase.detail_x, 3.8, 4.0, 0.35),
            phase.heading,
            TextStyle::new(11.0, phase.accent.resolve(theme)).bold(),
        );
        b.text(
            BBox::new(phase.detail_x, 4.15, 4.5, 1.2),
            phase.tasks,
            TextStyle::new(9.0, theme.gray),
        );
    }
    b.finish()
}

pub fn closing_slide(theme: &Theme, _assets: &SlideAssets, layout: LayoutKind) -> Slide {
    let mut b = SlideBuilder::with_canvas(theme, layout.size_inches());
    let (width, height) = b.canvas();
    let dy = centering_offset(height);
    b.background(Rgb::WHITE);
    b.text(
        BBox::new(0.0, 2.0 + dy, width, 1.0),
        "Q & A",
        TextStyle::new(56.0, theme.navy).bold().center(),
    );
    b.rect(BBox::new(4.25, 3.0 + dy, 1.5, 0.06), ShapeStyle::filled(theme.red));
    b.text(
        BBox::new(0.0, 3.3 + dy, width, 0.5),
        "질문 및 의견을 말씀해 주십시오.",
        TextStyle::new(14.0, theme.gray).center(),
    );
    b.text(
        BBox::new(0.0, 3.9 + dy, width, 0.5),
        "감사합니다.",
        TextStyle::new(18.0, theme.ink).center(),
    );
    b.text(
        BBox::new(0.0, height - FOOTER_INSET, width, 0.3),
        COMPANY,
        TextStyle::new(10.0, theme.muted).center(),
    );
    b.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/deck/content.rs"]
mod tests;
