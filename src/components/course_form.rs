//! Editable course fields shared by the create and update views.

use leptos::prelude::*;

use crate::net::types::{Course, CourseDraft};

/// Input signals for one course form.
#[derive(Clone, Copy, Debug)]
pub struct CourseFields {
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub estimated_time: RwSignal<String>,
    pub materials_needed: RwSignal<String>,
}

impl CourseFields {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            estimated_time: RwSignal::new(String::new()),
            materials_needed: RwSignal::new(String::new()),
        }
    }

    /// Populate from a loaded course.
    pub fn fill(&self, course: &Course) {
        self.title.set(course.title.clone());
        self.description.set(course.description.clone());
        self.estimated_time.set(course.estimated_time.clone().unwrap_or_default());
        self.materials_needed.set(course.materials_needed.clone().unwrap_or_default());
    }

    pub fn draft(&self) -> CourseDraft {
        CourseDraft::from_form(
            &self.title.get_untracked(),
            &self.description.get_untracked(),
            &self.estimated_time.get_untracked(),
            &self.materials_needed.get_untracked(),
        )
    }
}

impl Default for CourseFields {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn CourseFormFields(fields: CourseFields, #[prop(into)] author: Signal<String>) -> impl IntoView {
    view! {
        <div class="main--flex">
            <div>
                <label for="courseTitle">"Course Title"</label>
                <input
                    id="courseTitle"
                    name="title"
                    type="text"
                    placeholder="Course title..."
                    prop:value=move || fields.title.get()
                    on:input=move |ev| fields.title.set(event_target_value(&ev))
                />
                <p>"By " {move || author.get()}</p>
                <label for="courseDescription">"Course Description"</label>
                <textarea
                    id="courseDescription"
                    name="description"
                    placeholder="Course description..."
                    prop:value=move || fields.description.get()
                    on:input=move |ev| fields.description.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div>
                <label for="estimatedTime">"Estimated Time"</label>
                <input
                    id="estimatedTime"
                    name="estimatedTime"
                    type="text"
                    placeholder="Hours"
                    prop:value=move || fields.estimated_time.get()
                    on:input=move |ev| fields.estimated_time.set(event_target_value(&ev))
                />
                <label for="materialsNeeded">"Materials Needed"</label>
                <textarea
                    id="materialsNeeded"
                    name="materialsNeeded"
                    placeholder="List materials..."
                    prop:value=move || fields.materials_needed.get()
                    on:input=move |ev| fields.materials_needed.set(event_target_value(&ev))
                ></textarea>
            </div>
        </div>
    }
}
