//! Hard-coded copy and mock figures for the static page sections.
//!
//! Nothing here is computed; the dashboard numbers are marketing placeholders.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Upload,
    FileText,
    BarChart,
    Brain,
    BookOpen,
    Target,
    TrendingUp,
    Clock,
    Award,
    CheckCircle,
    Zap,
    Shield,
    Globe,
    ArrowRight,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::Upload => "upload",
            Icon::FileText => "file-text",
            Icon::BarChart => "bar-chart",
            Icon::Brain => "brain",
            Icon::BookOpen => "book-open",
            Icon::Target => "target",
            Icon::TrendingUp => "trending-up",
            Icon::Clock => "clock",
            Icon::Award => "award",
            Icon::CheckCircle => "check-circle",
            Icon::Zap => "zap",
            Icon::Shield => "shield",
            Icon::Globe => "globe",
            Icon::ArrowRight => "arrow-right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Accent,
    Success,
    Warning,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Primary => "text-primary",
            Tone::Accent => "text-accent",
            Tone::Success => "text-success",
            Tone::Warning => "text-warning",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gradient {
    Primary,
    Accent,
}

impl Gradient {
    pub fn class(self) -> &'static str {
        match self {
            Gradient::Primary => "gradient-primary",
            Gradient::Accent => "gradient-accent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Outline,
    Destructive,
}

impl BadgeVariant {
    pub fn class(self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge",
            BadgeVariant::Secondary => "badge badge-secondary",
            BadgeVariant::Outline => "badge badge-outline",
            BadgeVariant::Destructive => "badge badge-destructive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn badge(self) -> BadgeVariant {
        match self {
            Priority::High => BadgeVariant::Destructive,
            Priority::Medium => BadgeVariant::Default,
            Priority::Low => BadgeVariant::Secondary,
        }
    }
}

// Hero

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroHighlight {
    pub icon: Icon,
    pub label: &'static str,
    pub count: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatingStat {
    pub icon: Option<Icon>,
    pub headline: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroContent {
    pub title_lead: &'static str,
    pub title_accent: &'static str,
    pub subtitle: &'static str,
    pub primary_action: &'static str,
    pub secondary_action: &'static str,
    pub image_src: &'static str,
    pub image_alt: &'static str,
    pub highlights: &'static [HeroHighlight],
    pub floating_stats: &'static [FloatingStat],
}

pub const HERO: HeroContent = HeroContent {
    title_lead: "AI-Powered",
    title_accent: "Study System",
    subtitle: "Upload documents, get instant assessments, track progress, and receive \
               personalized AI recommendations to optimize your learning journey.",
    primary_action: "Start Learning",
    secondary_action: "Watch Demo",
    image_src: "assets/hero-study-system.jpg",
    image_alt: "AI-powered study system interface showing document analysis and progress tracking",
    highlights: &[
        HeroHighlight {
            icon: Icon::Upload,
            label: "Upload Documents",
            count: "100+",
        },
        HeroHighlight {
            icon: Icon::FileText,
            label: "Auto Assessment",
            count: "Smart",
        },
        HeroHighlight {
            icon: Icon::BarChart,
            label: "Progress Tracking",
            count: "Real-time",
        },
        HeroHighlight {
            icon: Icon::Brain,
            label: "AI Recommendations",
            count: "Personal",
        },
    ],
    floating_stats: &[
        FloatingStat {
            icon: None,
            headline: "98% Accuracy",
            caption: "AI Analysis",
        },
        FloatingStat {
            icon: Some(Icon::BarChart),
            headline: "+47% Faster",
            caption: "Learning Speed",
        },
    ],
};

// Upload widget copy

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadCopy {
    pub heading: &'static str,
    pub intro: &'static str,
    pub drop_title: &'static str,
    pub drop_hint: &'static str,
    pub browse_action: &'static str,
    pub list_heading: &'static str,
}

pub const UPLOAD: UploadCopy = UploadCopy {
    heading: "Upload Your Documents",
    intro: "Upload PDFs, Word documents, PowerPoint presentations, or images. Our AI will \
            analyze content and generate personalized assessments automatically.",
    drop_title: "Drop your files here",
    drop_hint: "Or click to browse and select files from your device",
    browse_action: "Browse Files",
    list_heading: "Processing Files",
};

// Dashboard

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudyStat {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: Icon,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentDocument {
    pub name: &'static str,
    pub progress: u8,
    pub questions: u32,
    pub completed: u32,
}

impl RecentDocument {
    /// Documents at 80% or more get the emphasised badge.
    pub fn badge(&self) -> BadgeVariant {
        if self.progress >= 80 {
            BadgeVariant::Default
        } else {
            BadgeVariant::Secondary
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Teaser {
    pub icon: Icon,
    pub title: &'static str,
    pub body: &'static str,
    pub action_icon: Icon,
    pub action: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardContent {
    pub heading: &'static str,
    pub intro: &'static str,
    pub stats: &'static [StudyStat],
    pub documents_heading: &'static str,
    pub documents_action: &'static str,
    pub recent_documents: &'static [RecentDocument],
    pub recommendations_heading: &'static str,
    pub recommendations: &'static [Recommendation],
    pub analysis_action: &'static str,
    pub teaser: Teaser,
}

pub const DASHBOARD: DashboardContent = DashboardContent {
    heading: "Your Study Dashboard",
    intro: "Track your progress, view analytics, and get AI-powered recommendations \
            to optimize your learning experience.",
    stats: &[
        StudyStat {
            label: "Documents Processed",
            value: "24",
            icon: Icon::FileText,
            tone: Tone::Primary,
        },
        StudyStat {
            label: "Assessments Completed",
            value: "156",
            icon: Icon::CheckCircle,
            tone: Tone::Success,
        },
        StudyStat {
            label: "Study Streak",
            value: "12 days",
            icon: Icon::Target,
            tone: Tone::Accent,
        },
        StudyStat {
            label: "Avg. Score",
            value: "87%",
            icon: Icon::Award,
            tone: Tone::Warning,
        },
    ],
    documents_heading: "Recent Documents",
    documents_action: "View All",
    recent_documents: &[
        RecentDocument {
            name: "Advanced Calculus Notes",
            progress: 85,
            questions: 12,
            completed: 10,
        },
        RecentDocument {
            name: "Biology Chapter 5",
            progress: 60,
            questions: 15,
            completed: 9,
        },
        RecentDocument {
            name: "History Research Paper",
            progress: 40,
            questions: 8,
            completed: 3,
        },
    ],
    recommendations_heading: "AI Recommendations",
    recommendations: &[
        Recommendation {
            category: "Focus Area",
            title: "Strengthen Molecular Biology",
            description: "Based on recent performance, spend more time on cellular processes",
            priority: Priority::High,
        },
        Recommendation {
            category: "Study Method",
            title: "Try Spaced Repetition",
            description: "Your retention could improve by 23% with this technique",
            priority: Priority::Medium,
        },
        Recommendation {
            category: "Time Management",
            title: "Optimal Study Time",
            description: "Your peak performance window is 2-4 PM",
            priority: Priority::Low,
        },
    ],
    analysis_action: "View Full Analysis",
    teaser: Teaser {
        icon: Icon::TrendingUp,
        title: "Advanced Analytics Coming Soon",
        body: "Detailed performance charts, learning patterns, and predictive insights \
               will be available in the next update.",
        action_icon: Icon::Clock,
        action: "Notify Me",
    },
};

// Feature grid

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub tone: Tone,
    pub gradient: Gradient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiniFeature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub heading: &'static str,
    pub body: &'static str,
    pub primary_action: &'static str,
    pub secondary_action: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureGridContent {
    pub heading: &'static str,
    pub intro: &'static str,
    pub features: &'static [Feature],
    pub feature_action: &'static str,
    pub extras: &'static [MiniFeature],
    pub call_to_action: CallToAction,
}

pub const FEATURE_GRID: FeatureGridContent = FeatureGridContent {
    heading: "Powerful Features for Modern Learning",
    intro: "Our AI-powered platform combines cutting-edge technology with proven learning \
            methodologies to create the ultimate study experience.",
    features: &[
        Feature {
            icon: Icon::Upload,
            title: "Smart Document Processing",
            description: "Upload any document format and get instant AI-powered content analysis \
                          with automatic topic extraction and summary generation.",
            tone: Tone::Primary,
            gradient: Gradient::Primary,
        },
        Feature {
            icon: Icon::Brain,
            title: "AI Assessment Generation",
            description: "Automatically create personalized quizzes, flashcards, and practice \
                          tests based on your uploaded materials.",
            tone: Tone::Accent,
            gradient: Gradient::Accent,
        },
        Feature {
            icon: Icon::BarChart,
            title: "Advanced Analytics",
            description: "Track learning patterns, identify knowledge gaps, and monitor progress \
                          with detailed performance metrics and insights.",
            tone: Tone::Success,
            gradient: Gradient::Primary,
        },
        Feature {
            icon: Icon::Target,
            title: "Personalized Recommendations",
            description: "Get AI-driven study suggestions, optimal timing recommendations, and \
                          customized learning paths for maximum efficiency.",
            tone: Tone::Warning,
            gradient: Gradient::Accent,
        },
        Feature {
            icon: Icon::Zap,
            title: "Instant Feedback",
            description: "Receive immediate detailed explanations for answers, helping reinforce \
                          learning and correct misconceptions in real-time.",
            tone: Tone::Primary,
            gradient: Gradient::Primary,
        },
        Feature {
            icon: Icon::Shield,
            title: "Secure & Private",
            description: "Your documents and data are encrypted and stored securely with \
                          enterprise-grade privacy protection and GDPR compliance.",
            tone: Tone::Accent,
            gradient: Gradient::Accent,
        },
    ],
    feature_action: "Learn more",
    extras: &[
        MiniFeature {
            icon: Icon::Clock,
            title: "Smart Scheduling",
            description: "AI-optimized study sessions",
        },
        MiniFeature {
            icon: Icon::Globe,
            title: "Multi-language",
            description: "Support for 50+ languages",
        },
        MiniFeature {
            icon: Icon::Target,
            title: "Goal Tracking",
            description: "Set and achieve learning objectives",
        },
    ],
    call_to_action: CallToAction {
        heading: "Ready to Transform Your Learning?",
        body: "Join thousands of students who have already improved their study efficiency \
               by 47% on average.",
        primary_action: "Get Started Free",
        secondary_action: "Schedule Demo",
    },
};
