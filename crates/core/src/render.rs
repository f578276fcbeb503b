//! Static landing-page rendering.
//!
//! Turns an idea and the pitch content generated from it into a complete, self-contained HTML
//! document. Rendering is a pure function: it performs no I/O and never fails. Missing or empty
//! pitch fields degrade to placeholder text.
//!
//! By default interpolated values are inserted verbatim, so markup stored in a pitch ends up in
//! the page. [`RenderOptions::escape_html`] switches on escaping of every interpolated value.

use crate::constants::{
    LANDING_COPY_PLACEHOLDER, PITCH_PLACEHOLDER, PROBLEM_PLACEHOLDER, SOLUTION_PLACEHOLDER,
    STARTUP_NAME_PLACEHOLDER, TAGLINE_PLACEHOLDER, TARGET_AUDIENCE_PLACEHOLDER,
};
use crate::model::{non_empty, Idea, Language, PitchContent};
use std::borrow::Cow;

/// Rendering switches resolved once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape `& < > " '` in every interpolated value.
    pub escape_html: bool,
}

/// Fixed text for one document language.
struct Labels {
    problem_solution: &'static str,
    problem: &'static str,
    solution: &'static str,
    target_audience: &'static str,
    pitch: &'static str,
    call_to_action: &'static str,
    footer: &'static str,
}

const ENGLISH_LABELS: Labels = Labels {
    problem_solution: "Problem & Solution",
    problem: "The Problem",
    solution: "Our Solution",
    target_audience: "Target Audience",
    pitch: "Our Pitch",
    call_to_action: "Get Started",
    footer: "Created with PitchCraft",
};

const URDU_LABELS: Labels = Labels {
    problem_solution: "مسئلہ اور حل",
    problem: "مسئلہ",
    solution: "حل",
    target_audience: "ہدف شدہ سامعین",
    pitch: "ہمارا پیچ",
    call_to_action: "شروع کریں",
    footer: "PitchCraft کے ذریعے بنایا گیا",
};

impl Language {
    fn labels(self) -> &'static Labels {
        match self {
            Language::English => &ENGLISH_LABELS,
            Language::Urdu => &URDU_LABELS,
        }
    }
}

const STYLESHEET: &str = r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            line-height: 1.6;
            color: #333;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
        }

        .container {
            max-width: 1200px;
            margin: 0 auto;
            padding: 20px;
        }

        .header {
            text-align: center;
            color: white;
            margin-bottom: 40px;
        }

        .logo {
            width: 80px;
            height: 80px;
            background: white;
            border-radius: 50%;
            margin: 0 auto 20px;
            display: flex;
            align-items: center;
            justify-content: center;
            font-size: 32px;
            font-weight: bold;
            color: #667eea;
            box-shadow: 0 4px 20px rgba(0,0,0,0.1);
        }

        .startup-name {
            font-size: 3rem;
            font-weight: bold;
            margin-bottom: 10px;
            text-shadow: 2px 2px 4px rgba(0,0,0,0.3);
        }

        .tagline {
            font-size: 1.5rem;
            opacity: 0.9;
            font-weight: 300;
        }

        .content {
            background: white;
            border-radius: 20px;
            padding: 40px;
            box-shadow: 0 20px 40px rgba(0,0,0,0.1);
            margin-bottom: 30px;
        }

        .section {
            margin-bottom: 40px;
        }

        .section-title {
            font-size: 2rem;
            color: #667eea;
            margin-bottom: 20px;
            border-bottom: 3px solid #667eea;
            padding-bottom: 10px;
        }

        .problem-solution {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 30px;
            margin-bottom: 30px;
        }

        .problem, .solution {
            padding: 25px;
            border-radius: 15px;
            border-left: 5px solid;
        }

        .problem {
            background: #fef2f2;
            border-left-color: #ef4444;
        }

        .solution {
            background: #f0fdf4;
            border-left-color: #22c55e;
        }

        .problem h3, .solution h3 {
            font-size: 1.3rem;
            margin-bottom: 15px;
            color: #374151;
        }

        .target-audience {
            background: #f8fafc;
            padding: 25px;
            border-radius: 15px;
            border-left: 5px solid #3b82f6;
        }

        .pitch-content {
            background: #fefce8;
            padding: 30px;
            border-radius: 15px;
            border-left: 5px solid #eab308;
            font-size: 1.1rem;
            line-height: 1.8;
        }

        .landing-copy {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 30px;
            border-radius: 15px;
            text-align: center;
            font-size: 1.2rem;
            line-height: 1.8;
        }

        .cta-button {
            display: inline-block;
            background: white;
            color: #667eea;
            padding: 15px 30px;
            border-radius: 50px;
            text-decoration: none;
            font-weight: bold;
            margin-top: 20px;
            transition: transform 0.3s ease;
            box-shadow: 0 4px 15px rgba(0,0,0,0.2);
        }

        .cta-button:hover {
            transform: translateY(-2px);
        }

        .footer {
            text-align: center;
            color: white;
            opacity: 0.8;
            margin-top: 40px;
        }

        @media (max-width: 768px) {
            .startup-name {
                font-size: 2rem;
            }

            .tagline {
                font-size: 1.2rem;
            }

            .problem-solution {
                grid-template-columns: 1fr;
            }

            .content {
                padding: 20px;
            }
        }
    "#;

/// HTML-escape a string.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Pitch content after placeholder substitution.
struct ResolvedContent<'a> {
    startup_name: &'a str,
    tagline: &'a str,
    pitch: &'a str,
    problem: &'a str,
    solution: &'a str,
    target_audience: &'a str,
    landing_copy: &'a str,
}

impl<'a> ResolvedContent<'a> {
    fn resolve(content: &'a PitchContent) -> Self {
        Self {
            startup_name: non_empty(&content.startup_name).unwrap_or(STARTUP_NAME_PLACEHOLDER),
            tagline: non_empty(&content.tagline).unwrap_or(TAGLINE_PLACEHOLDER),
            pitch: non_empty(&content.pitch).unwrap_or(PITCH_PLACEHOLDER),
            problem: non_empty(&content.problem).unwrap_or(PROBLEM_PLACEHOLDER),
            solution: non_empty(&content.solution).unwrap_or(SOLUTION_PLACEHOLDER),
            target_audience: non_empty(&content.target_audience)
                .unwrap_or(TARGET_AUDIENCE_PLACEHOLDER),
            landing_copy: non_empty(&content.landing_copy).unwrap_or(LANDING_COPY_PLACEHOLDER),
        }
    }
}

/// Upper-cased first character of the startup name.
///
/// Upper-casing can expand a character (`ß` becomes `SS`), so the result is a string.
fn monogram(startup_name: &str) -> String {
    startup_name
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Renders the landing page for a pitch.
///
/// `idea` decides the document language; when it is `None` the default idea is used, which
/// renders in English.
pub fn render_document(
    idea: Option<&Idea>,
    content: &PitchContent,
    options: RenderOptions,
) -> String {
    let default_idea;
    let idea = match idea {
        Some(idea) => idea,
        None => {
            default_idea = Idea::default();
            &default_idea
        }
    };

    let language = idea.language();
    let labels = language.labels();
    let resolved = ResolvedContent::resolve(content);
    let monogram = monogram(resolved.startup_name);

    format!(
        r##"<!DOCTYPE html>
<html lang="{lang}" dir="{dir}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{startup_name} - {tagline}</title>
    <style>{style}</style>
</head>
<body>
    <div class="container">
        <header class="header">
            <div class="logo">{monogram}</div>
            <h1 class="startup-name">{startup_name}</h1>
            <p class="tagline">{tagline}</p>
        </header>

        <div class="content">
            <section class="section">
                <h2 class="section-title">{problem_solution_heading}</h2>
                <div class="problem-solution">
                    <div class="problem">
                        <h3>{problem_heading}</h3>
                        <p>{problem}</p>
                    </div>
                    <div class="solution">
                        <h3>{solution_heading}</h3>
                        <p>{solution}</p>
                    </div>
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{target_audience_heading}</h2>
                <div class="target-audience">
                    <p>{target_audience}</p>
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{pitch_heading}</h2>
                <div class="pitch-content">
                    <p>{pitch}</p>
                </div>
            </section>

            <section class="section">
                <div class="landing-copy">
                    <p>{landing_copy}</p>
                    <a href="#" class="cta-button">{call_to_action}</a>
                </div>
            </section>
        </div>

        <footer class="footer">
            <p>{footer}</p>
        </footer>
    </div>
</body>
</html>"##,
        lang = language.tag(),
        dir = language.direction(),
        style = STYLESHEET,
        startup_name = interpolate(resolved.startup_name, options),
        tagline = interpolate(resolved.tagline, options),
        monogram = interpolate(&monogram, options),
        problem = interpolate(resolved.problem, options),
        solution = interpolate(resolved.solution, options),
        target_audience = interpolate(resolved.target_audience, options),
        pitch = interpolate(resolved.pitch, options),
        landing_copy = interpolate(resolved.landing_copy, options),
        problem_solution_heading = labels.problem_solution,
        problem_heading = labels.problem,
        solution_heading = labels.solution,
        target_audience_heading = labels.target_audience,
        pitch_heading = labels.pitch,
        call_to_action = labels.call_to_action,
        footer = labels.footer,
    )
}

fn interpolate(value: &str, options: RenderOptions) -> Cow<'_, str> {
    if options.escape_html {
        Cow::Owned(html_escape(value))
    } else {
        Cow::Borrowed(value)
    }
}
