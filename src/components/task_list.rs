//! Task List Component
//!
//! Fetches, filters, and mutates the task collection. Completion toggling is
//! optimistic: the row flips immediately, the server is told in the
//! background, and a failure restores the exact pre-toggle snapshot.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, tasks::UpdateTaskRequest};
use crate::components::{use_toaster, TaskForm, TaskItem};
use crate::models::Task;
use crate::optimistic::{self, InFlight};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaskFilter {
    All,
    Active,
    Completed,
}

impl TaskFilter {
    fn label(self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Active => "Active",
            TaskFilter::Completed => "Completed",
        }
    }

    fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.is_completed,
            TaskFilter::Completed => task.is_completed,
        }
    }
}

const FILTERS: &[TaskFilter] = &[TaskFilter::All, TaskFilter::Active, TaskFilter::Completed];

#[component]
pub fn TaskList() -> impl IntoView {
    let toaster = use_toaster();

    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (loading, set_loading) = signal(true);
    let (filter, set_filter) = signal(TaskFilter::All);
    let (create_open, set_create_open) = signal(false);
    let (in_flight, set_in_flight) = signal(InFlight::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Load tasks on mount and whenever a reload is requested
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::tasks::list().await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[TASKS] Loaded {} tasks", loaded.len()).into(),
                    );
                    set_tasks.set(loaded);
                }
                Err(error) => {
                    web_sys::console::error_1(&format!("[TASKS] load failed: {}", error).into());
                    toaster.error("Failed to load tasks");
                }
            }
            set_loading.set(false);
        });
    });

    // Optimistic toggle with a per-task in-flight guard: a second click on
    // the same row is ignored until the first call settles.
    let on_toggle = Callback::new(move |id: String| {
        let mut began = false;
        set_in_flight.update(|guard| began = guard.try_begin(&id));
        if !began {
            return;
        }

        let mut snapshot = None;
        set_tasks.update(|tasks| snapshot = optimistic::apply_toggle(tasks, &id));
        let Some(snapshot) = snapshot else {
            set_in_flight.update(|guard| guard.finish(&id));
            return;
        };

        let desired = !snapshot.is_completed;
        let task_id = snapshot.id.clone();
        spawn_local(async move {
            let request = UpdateTaskRequest {
                is_completed: Some(desired),
                ..Default::default()
            };
            match api::tasks::update(&task_id, &request).await {
                Ok(confirmed) => {
                    set_tasks.update(|tasks| optimistic::apply_confirmed(tasks, confirmed));
                }
                Err(error) => {
                    web_sys::console::error_1(&format!("[TASKS] toggle failed: {}", error).into());
                    set_tasks.update(|tasks| optimistic::restore_snapshot(tasks, snapshot));
                    toaster.error("Failed to update task");
                }
            }
            set_in_flight.update(|guard| guard.finish(&task_id));
        });
    });

    let on_created = Callback::new(move |task: Task| {
        set_tasks.update(|tasks| tasks.insert(0, task));
        set_create_open.set(false);
        toaster.success("Task created successfully");
    });

    let on_updated = Callback::new(move |updated: Task| {
        set_tasks.update(|tasks| optimistic::apply_confirmed(tasks, updated));
        toaster.success("Task updated");
    });

    let on_deleted = Callback::new(move |id: String| {
        set_tasks.update(|tasks| tasks.retain(|t| t.id != id));
    });

    let filtered = move || {
        let current = filter.get();
        tasks
            .get()
            .into_iter()
            .filter(|task| current.matches(task))
            .collect::<Vec<_>>()
    };
    let active_count = move || tasks.get().iter().filter(|t| !t.is_completed).count();

    view! {
        <div class="task-list">
            <div class="task-list-header">
                <div>
                    <h2>"My Tasks"</h2>
                    <p class="task-count">
                        "You have " <strong>{active_count}</strong> " tasks remaining"
                    </p>
                </div>
                <div class="task-list-controls">
                    <button
                        class="icon-btn"
                        title="Refresh tasks"
                        on:click=move |_| set_reload_trigger.update(|v| *v += 1)
                    >
                        "⟳"
                    </button>
                    <div class="filter-group">
                        {FILTERS.iter().map(|&option| {
                            let is_active = move || filter.get() == option;
                            view! {
                                <button
                                    class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                                    on:click=move |_| set_filter.set(option)
                                >
                                    {option.label()}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                    <button class="primary-btn" on:click=move |_| set_create_open.set(true)>
                        "+ New Task"
                    </button>
                </div>
            </div>

            <Show when=move || create_open.get()>
                <div class="create-panel">
                    <h3>"Create New Task"</h3>
                    <TaskForm
                        on_created=on_created
                        on_cancel=Callback::new(move |()| set_create_open.set(false))
                    />
                </div>
            </Show>

            {move || {
                if loading.get() && tasks.get().is_empty() {
                    view! {
                        <div class="skeleton-grid">
                            <div class="skeleton-card"></div>
                            <div class="skeleton-card"></div>
                            <div class="skeleton-card"></div>
                        </div>
                    }.into_any()
                } else if filtered().is_empty() {
                    let current = filter.get();
                    view! {
                        <div class="empty-state">
                            <h3>"No tasks found"</h3>
                            <p>
                                {if current == TaskFilter::All {
                                    "You haven't created any tasks yet. Get started by adding your first task!".to_string()
                                } else {
                                    format!("No {} tasks found. Try changing the filter.", current.label().to_lowercase())
                                }}
                            </p>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="task-grid">
                            <For
                                each=filtered
                                key=|task| (
                                    task.id.clone(),
                                    task.is_completed,
                                    task.title.clone(),
                                    task.description.clone(),
                                )
                                children=move |task| {
                                    view! {
                                        <TaskItem
                                            task=task
                                            in_flight=in_flight
                                            on_toggle=on_toggle
                                            on_updated=on_updated
                                            on_deleted=on_deleted
                                        />
                                    }
                                }
                            />
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
