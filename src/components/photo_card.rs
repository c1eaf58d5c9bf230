//! Photo Card Component

use leptos::prelude::*;

use crate::models::Photo;

#[component]
pub fn PhotoCard(photo: Photo) -> impl IntoView {
    view! {
        <div class="card image-card">
            <img src=photo.thumbnail_url alt=photo.title.clone() loading="lazy" />
            <div class="card-body">
                <h3 class="card-title">{format!("Photo #{}", photo.id)}</h3>
                <p class="photo-title">{photo.title}</p>
                <div class="card-meta">{format!("Album: {}", photo.album_id)}</div>
            </div>
        </div>
    }
}
