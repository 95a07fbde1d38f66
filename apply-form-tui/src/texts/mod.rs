//! 界面文本
//!
//! 所有显示文本集中在一个结构体中，编译期类型检查，零运行时开销。
//!
//! ## 分类标准
//!
//! 1. **弹窗内容归 `modal.*`**
//! 2. **宿主页面内容归 `home.*`**
//! 3. **键盘提示归 `hints.*`**
//! 4. **状态栏消息归 `status.*`**

/// 所有界面文本的根结构
pub struct Texts {
    pub app_title: &'static str,
    pub home: HomeTexts,
    pub modal: ModalTexts,
    pub hints: HintTexts,
    pub status: StatusTexts,
}

/// 宿主页面文本
pub struct HomeTexts {
    pub title: &'static str,
    pub trigger_label: &'static str,
    pub trigger_description: &'static str,
    pub submissions_title: &'static str,
    pub no_submissions: &'static str,
    pub scroll_locked: &'static str,
}

/// 弹窗文本
pub struct ModalTexts {
    pub heading: &'static str,
    pub description: &'static str,
    pub name_label: &'static str,
    pub email_label: &'static str,
    pub experience_label: &'static str,
    pub experience_placeholder: &'static str,
    pub github_label: &'static str,
    pub github_placeholder: &'static str,
    pub cancel: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
    pub required_mark: &'static str,
}

/// 键盘提示
pub struct HintTexts {
    pub open_form: &'static str,
    pub switch_focus: &'static str,
    pub scroll: &'static str,
    pub quit: &'static str,
    pub next_field: &'static str,
    pub submit: &'static str,
    pub cancel: &'static str,
    pub choose: &'static str,
}

/// 状态栏消息
pub struct StatusTexts {
    pub received: &'static str,
    pub cancelled: &'static str,
    pub already_open: &'static str,
    pub result_lost: &'static str,
    pub screen_reader_prefix: &'static str,
}

static TEXTS: Texts = Texts {
    app_title: " Apply Form v0.1.0",
    home: HomeTexts {
        title: "Home",
        trigger_label: "🚀 Write application form",
        trigger_description: "Open the application form dialog",
        submissions_title: " Submissions ",
        no_submissions: "No applications received yet",
        scroll_locked: "(scrolling paused while the form is open)",
    },
    modal: ModalTexts {
        heading: "Application Form",
        description: "Please enter a few details such as your email and years of FE experience.",
        name_label: "Name / Nickname",
        email_label: "Email",
        experience_label: "Years of FE experience",
        experience_placeholder: "Please choose",
        github_label: "GitHub link (optional)",
        github_placeholder: "https://github.com/username",
        cancel: "Cancel",
        submit: "Submit",
        submitting: "Submitting...",
        required_mark: " *",
    },
    hints: HintTexts {
        open_form: "Open form",
        switch_focus: "Switch focus",
        scroll: "Scroll",
        quit: "Quit",
        next_field: "Next/Prev",
        submit: "Submit",
        cancel: "Cancel",
        choose: "Choose",
    },
    status: StatusTexts {
        received: "Application received from",
        cancelled: "Application form cancelled",
        already_open: "The application form is already open",
        result_lost: "The form closed without a result",
        screen_reader_prefix: "SR:",
    },
};

/// 获取界面文本
pub fn t() -> &'static Texts {
    &TEXTS
}
