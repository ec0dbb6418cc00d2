//! Window bodies, one per [`AppContent`] variant.

use super::*;
use crate::{
    apps::{AppContent, ExperienceId},
    content::{self, GALLERY_IMAGES, NOW_PLAYING, PROJECTS, RESUME, WELCOME_TIPS},
    mail::{ComposeStatus, MailAction},
};

#[component]
pub(super) fn WindowBody(content: AppContent) -> impl IntoView {
    match content {
        AppContent::Welcome => view! { <WelcomePanel /> }.into_view(),
        AppContent::Projects => view! { <ProjectsPanel /> }.into_view(),
        AppContent::Gallery => view! { <GalleryPanel /> }.into_view(),
        AppContent::Mail => view! { <MailPanel /> }.into_view(),
        AppContent::Player => view! { <PlayerPanel /> }.into_view(),
        AppContent::Resume => view! { <ResumePanel /> }.into_view(),
        AppContent::ExperienceDetail(id) => view! { <ExperiencePanel experience_id=id /> }.into_view(),
    }
}

#[component]
fn WelcomePanel() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div class="panel-welcome">
            <div class="welcome-card">
                <div class="welcome-heading">
                    <img class="welcome-avatar" src=PROFILE.avatar_url alt="" />
                    <div>
                        <h1>"Welcome"</h1>
                        <p>{format!("to {}'s Portfolio", PROFILE.name)}</p>
                    </div>
                </div>
                <p class="welcome-intro">
                    "Hi! I am a " <strong>{PROFILE.title}</strong>
                    " specializing in the Microsoft 365 ecosystem. "
                    "This site is a fully interactive simulation of Windows XP."
                </p>
                <div class="welcome-tips">
                    <strong>"Tips:"</strong>
                    <ul>
                        {WELCOME_TIPS.iter().map(|tip| view! { <li>{*tip}</li> }).collect_view()}
                    </ul>
                </div>
                <button
                    class="welcome-start"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::OpenApp { app_id: AppId::Work })
                >
                    "Start Exploring"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ProjectsPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let open = move |app_id: AppId| runtime.dispatch_action(DesktopAction::OpenApp { app_id });

    view! {
        <div class="panel-projects">
            <aside class="explorer-sidebar">
                <section class="explorer-task-group">
                    <h4>"Project Tasks"</h4>
                    <ul>
                        <li>"View project details"</li>
                        <li>"Download source code"</li>
                        <li>"Share this folder"</li>
                    </ul>
                </section>
                <section class="explorer-task-group">
                    <h4>"Other Places"</h4>
                    <ul>
                        <li class="link" on:click=move |_| open(AppId::Cv)>"My CV"</li>
                        <li>"My Network Places"</li>
                        <li>"My Documents"</li>
                        <li>"Control Panel"</li>
                    </ul>
                </section>
            </aside>
            <div class="explorer-items">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        let target = project.target;
                        view! {
                            <div class="explorer-item" on:dblclick=move |_| open(target)>
                                <AppGlyph icon=project.icon large=true />
                                <span class="explorer-item-name">{project.name}</span>
                                <span class="explorer-item-role">{project.role}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Index reached by stepping `delta` images from `current`, wrapping at both ends.
pub(crate) fn cycle_index(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (current as isize + delta).rem_euclid(len) as usize
}

#[component]
fn GalleryPanel() -> impl IntoView {
    let index = create_rw_signal(0usize);
    let step = move |delta: isize| index.update(|i| *i = cycle_index(*i, delta, GALLERY_IMAGES.len()));

    view! {
        <div class="panel-gallery">
            <div class="gallery-stage">
                <img class="gallery-image" src=move || GALLERY_IMAGES[index.get()] alt="Gallery" />
                <button class="gallery-nav prev" aria-label="Previous image" on:click=move |_| step(-1)>
                    "‹"
                </button>
                <button class="gallery-nav next" aria-label="Next image" on:click=move |_| step(1)>
                    "›"
                </button>
            </div>
            <div class="gallery-dots">
                {(0..GALLERY_IMAGES.len())
                    .map(|i| {
                        view! {
                            <span
                                class="gallery-dot"
                                class:current=move || index.get() == i
                                on:click=move |_| index.set(i)
                            ></span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn MailPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let compose = create_memo(move |_| runtime.state.get().mail);
    let mail = move |action: MailAction| runtime.dispatch_action(DesktopAction::Mail(action));

    view! {
        <div class="panel-mail">
            <div class="mail-toolbar">
                <span class="mail-tool">"Send/Recv"</span>
                <span class="mail-tool-separator"></span>
                <button class="mail-tool" on:click=move |_| mail(MailAction::OpenCompose)>
                    "New Mail"
                </button>
            </div>
            <div class="mail-main">
                <aside class="mail-folders">
                    <h4>"Local Folders"</h4>
                    <ul>
                        <li class="selected">"Inbox (1)"</li>
                        <li>"Outbox"</li>
                        <li>"Sent Items"</li>
                    </ul>
                </aside>
                <div class="mail-content">
                    <table class="mail-list">
                        <thead>
                            <tr>
                                <th>"!"</th>
                                <th>"From"</th>
                                <th>"Subject"</th>
                                <th>"Received"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <tr class="unread">
                                <td></td>
                                <td>{PROFILE.name}</td>
                                <td>"Welcome to my portfolio!"</td>
                                <td>"Today"</td>
                            </tr>
                        </tbody>
                    </table>
                    <div class="mail-reading-pane">
                        <div class="mail-hint">
                            "Click \"New Mail\" above to contact me directly through this simulation."
                        </div>
                        <div class="mail-headers">
                            <p><strong>"From: "</strong>{format!("{} <{}>", PROFILE.name, PROFILE.email)}</p>
                            <p><strong>"To: "</strong>"Visitor"</p>
                            <p><strong>"Subject: "</strong>"Job Opportunity"</p>
                        </div>
                        <div class="mail-body">
                            <p>"Hello,"</p>
                            <p>
                                "I am currently open to new opportunities. Please feel free to reach out using the \"New Mail\" button above!"
                            </p>
                            <p>"Best regards," <br /> "Affan"</p>
                        </div>
                    </div>
                </div>
            </div>

            <Show when=move || compose.get().is_open() fallback=|| ()>
                <div class="mail-compose-overlay">
                    <div class="mail-compose" role="dialog" aria-label="New Message">
                        <div class="mail-compose-titlebar">
                            <span>"New Message"</span>
                            <button
                                class="xp-control close"
                                aria-label="Close message"
                                on:click=move |_| mail(MailAction::CloseCompose)
                            ></button>
                        </div>
                        <div class="mail-compose-toolbar">
                            <button
                                class="mail-tool"
                                class:sent=move || compose.get().status == ComposeStatus::Sent
                                disabled=move || !compose.get().can_send()
                                on:click=move |_| mail(MailAction::Send)
                            >
                                "Send"
                            </button>
                            <span class="mail-tool-separator"></span>
                            <span class="mail-tool">"Attach"</span>
                        </div>
                        <form
                            class="mail-compose-form"
                            on:submit=move |ev: ev::SubmitEvent| {
                                ev.prevent_default();
                                mail(MailAction::Send);
                            }
                        >
                            <label class="mail-field">
                                <span>"To..."</span>
                                <input
                                    type="email"
                                    prop:value=move || compose.get().to
                                    on:input=move |ev| mail(MailAction::SetTo(event_target_value(&ev)))
                                />
                            </label>
                            <label class="mail-field">
                                <span>"Cc..."</span>
                                <input type="text" />
                            </label>
                            <label class="mail-field">
                                <span>"Subject:"</span>
                                <input
                                    type="text"
                                    prop:value=move || compose.get().subject
                                    on:input=move |ev| mail(MailAction::SetSubject(event_target_value(&ev)))
                                />
                            </label>
                            <textarea
                                placeholder="Type your message here..."
                                prop:value=move || compose.get().body
                                on:input=move |ev| mail(MailAction::SetBody(event_target_value(&ev)))
                            ></textarea>
                        </form>
                        {move || {
                            let state = compose.get();
                            if state.status == ComposeStatus::Sending {
                                return Some(view! { <div class="mail-compose-status">"Sending message..."</div> });
                            }
                            state.notice.map(|notice| {
                                view! {
                                    <div class="mail-compose-status" class:error=notice.is_error()>
                                        {notice.text()}
                                    </div>
                                }
                            })
                        }}
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn PlayerPanel() -> impl IntoView {
    view! {
        <div class="panel-player">
            <div class="player-display">
                <div class="player-spectrum" aria-hidden="true">
                    {(0..30u32)
                        .map(|i| {
                            let height = 20 + (i * 37 % 80);
                            view! { <span style=format!("height:{height}%;")></span> }
                        })
                        .collect_view()}
                </div>
                <span class="player-track">{NOW_PLAYING}</span>
            </div>
            <div class="player-meta">
                <span>"128 kbps"</span>
                <span>"00:54"</span>
            </div>
            <div class="player-controls">
                <button>"PREV"</button>
                <button class="play">"PLAY"</button>
                <button>"NEXT"</button>
            </div>
        </div>
    }
}

#[component]
fn ResumePanel() -> impl IntoView {
    view! {
        <article class="panel-document">
            <h2>{RESUME.heading}</h2>
            <p>{RESUME.summary}</p>
            <h3>"Education"</h3>
            <p>
                <strong>{RESUME.degree}</strong>
                <br />
                {RESUME.school}
            </p>
            <h3>"Skills Summary"</h3>
            <ul>
                {RESUME
                    .skills
                    .iter()
                    .map(|group| view! { <li><strong>{format!("{}:", group.label)}</strong> " " {group.items}</li> })
                    .collect_view()}
            </ul>
            <h3>"Professional Experience Summary"</h3>
            <p class="muted">{RESUME.experience_hint}</p>
        </article>
    }
}

#[component]
fn ExperiencePanel(experience_id: ExperienceId) -> impl IntoView {
    let experience = content::experience(experience_id);

    view! {
        <article class="panel-document">
            <h2>{experience.title}</h2>
            <p>
                <strong>"Role: "</strong>{experience.role}
                <br />
                <strong>"Duration: "</strong>{experience.dates}
                <br />
                <strong>"Location: "</strong>{experience.location}
            </p>
            <h3>"Key Responsibilities & Contributions:"</h3>
            <ul>
                {experience.highlights.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
            </ul>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::cycle_index;

    #[test]
    fn gallery_index_wraps_both_directions() {
        assert_eq!(cycle_index(2, 1, 3), 0);
        assert_eq!(cycle_index(0, -1, 3), 2);
        assert_eq!(cycle_index(1, 1, 3), 2);
        assert_eq!(cycle_index(0, 0, 0), 0);
    }
}
