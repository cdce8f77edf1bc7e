use super::Snippet;

/// Page modules.
pub const MODULES: &[Snippet] = &[Snippet {
    name: "Management Team Module",
    description: Some("Leadership team member profile card with image and bio"),
    body: r#"<div class="float-md-start me-3">
  <img
    alt="Robert Tripp"
    src="/portals/0/post_images/Leadership Team/Robert_Tripp_mgr.jpg"
    style="width: 175px; height: auto;"
    title="Robert Tripp"
    unselectable="on"
  />
</div>
<h3 class="mb-0">Robert Tripp</h3>
<h4 class="mt-0">
  Bureau Chief<br>
  Compliance Audit and Accountability Bureau
</h4>
<p>
  Lorem
</p>
<p>
  Lorem
</p>"#,
}];
