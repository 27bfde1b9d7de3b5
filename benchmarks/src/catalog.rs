//! The V8 benchmark declarations
//!
//! Page sets are named as the runner registers them. Entries sharing option
//! logic call the same builder in `measurement` and share override tables.

use crate::benchmark::{BenchmarkDescriptor, RunOptions};
use crate::browser_options::{BrowserOverride, INFINITE_SCROLL_OVERRIDES};
use crate::enablement::{Decorator, ShouldDisable};
use crate::measurement::{LegacyPageTest, MeasurementKind};
use crate::page_set::{Bucket, PageSet, StorySetSpec};
use crate::value_filter::ValueFilter;

pub const TOP_25_SMOOTH: &str = "v8.top_25_smooth";
pub const KEY_MOBILE_SITES_SMOOTH: &str = "v8.key_mobile_sites_smooth";
pub const DETACHED_CONTEXT_AGE_IN_GC: &str = "v8.detached_context_age_in_gc";
pub const TODOMVC: &str = "v8.todomvc";
pub const TODOMVC_IGNITION: &str = "v8.todomvc-ignition";
pub const INFINITE_SCROLL: &str = "v8.infinite_scroll";
pub const INFINITE_SCROLL_IGNITION: &str = "v8.infinite_scroll-ignition";
pub const MOBILE_INFINITE_SCROLL: &str = "v8.mobile_infinite_scroll";
pub const MOBILE_CODE_SIZE_IGNITION: &str = "top_10_mobile_memory_ignition";
pub const MOBILE_CODE_SIZE: &str = "top_10_mobile_memory";
pub const ADWORD: &str = "v8.google";

/// Device whose reference build cannot run the smoothness and scroll stories
const REFERENCE_BROKEN_DEVICE: &str = "Nexus 5X";

// Reference builds lack the Tracing.requestMemoryDump DevTools API.
const NO_REFERENCE: &[Decorator] = &[Decorator::Disabled(&["reference"])];
const ANDROID_ONLY: &[Decorator] = &[Decorator::Enabled(&["android"])];
// Scrolling google.com is broken on mac.
const CODE_SIZE_DECORATORS: &[Decorator] = &[
    Decorator::Disabled(&["reference"]),
    Decorator::Disabled(&["mac"]),
];

const IGNITION: &[BrowserOverride] = &[BrowserOverride::Ignition];
const INFINITE_SCROLL_IGNITION_OVERRIDES: &[BrowserOverride] = &[
    BrowserOverride::Steps(INFINITE_SCROLL_OVERRIDES),
    BrowserOverride::Ignition,
];

const ADWORD_STORY_SET: StorySetSpec = StorySetSpec {
    archive_data_file: "data/v8_pages.json",
    cloud_storage_bucket: Bucket::Partner,
    stories: &["AdwordCampaignDesktopPage"],
};

const RENDERING_DOC: &str = "http://www.chromium.org/developers/design-documents/rendering-benchmarks";

fn infinite_scroll(name: &'static str, description: &'static str, page_set: &'static str) -> BenchmarkDescriptor {
    BenchmarkDescriptor {
        browser_overrides: INFINITE_SCROLL_OVERRIDES,
        tear_down_after_each_story: true,
        value_filter: ValueFilter::RequireSubstring("v8"),
        ..BenchmarkDescriptor::new(
            name,
            description,
            PageSet::Named(page_set),
            MeasurementKind::InfiniteScroll,
        )
    }
}

fn mobile_code_size(name: &'static str, description: &'static str) -> BenchmarkDescriptor {
    BenchmarkDescriptor {
        decorators: CODE_SIZE_DECORATORS,
        tear_down_after_each_story: true,
        value_filter: ValueFilter::MemoryCodeSize,
        ..BenchmarkDescriptor::new(
            name,
            description,
            PageSet::Named("Top10MobileMemoryPageSet"),
            MeasurementKind::MemoryCodeSize,
        )
    }
}

fn todomvc(name: &'static str, description: &'static str) -> BenchmarkDescriptor {
    BenchmarkDescriptor {
        tear_down_after_each_story: true,
        ..BenchmarkDescriptor::new(
            name,
            description,
            PageSet::Named("TodoMVCPageSet"),
            MeasurementKind::V8Execution,
        )
    }
}

/// Every declared benchmark, in declaration order
pub fn benchmarks() -> Vec<BenchmarkDescriptor> {
    vec![
        BenchmarkDescriptor {
            decorators: &[Decorator::Disabled(&["win"])],
            should_disable: ShouldDisable::ReferenceOnDevice(REFERENCE_BROKEN_DEVICE),
            ..BenchmarkDescriptor::new(
                TOP_25_SMOOTH,
                "Measures V8 GC metrics while scrolling down the top 25 web pages.",
                PageSet::Named("V8Top25SmoothPageSet"),
                MeasurementKind::PageTest(LegacyPageTest::V8GcTimes),
            )
        },
        BenchmarkDescriptor {
            decorators: ANDROID_ONLY,
            should_disable: ShouldDisable::ReferenceOnDevice(REFERENCE_BROKEN_DEVICE),
            ..BenchmarkDescriptor::new(
                KEY_MOBILE_SITES_SMOOTH,
                "Measures V8 GC metrics while scrolling down key mobile sites.",
                PageSet::Named("KeyMobileSitesSmoothPageSet"),
                MeasurementKind::PageTest(LegacyPageTest::V8GcTimes),
            )
        },
        BenchmarkDescriptor::new(
            DETACHED_CONTEXT_AGE_IN_GC,
            "Measures the number of GCs needed to collect a detached context.",
            PageSet::Named("PageReloadCasesPageSet"),
            MeasurementKind::PageTest(LegacyPageTest::V8DetachedContextAgeInGc),
        ),
        todomvc(TODOMVC, "Measures V8 execution metrics on the TodoMVC examples."),
        BenchmarkDescriptor {
            decorators: NO_REFERENCE,
            browser_overrides: IGNITION,
            ..todomvc(
                TODOMVC_IGNITION,
                "Measures V8 execution metrics on the TodoMVC examples using Ignition.",
            )
        },
        BenchmarkDescriptor {
            decorators: NO_REFERENCE,
            ..infinite_scroll(
                INFINITE_SCROLL,
                "Measures V8 GC metrics and memory usage while scrolling the top web pages.",
                "InfiniteScrollPageSet",
            )
        },
        BenchmarkDescriptor {
            decorators: NO_REFERENCE,
            browser_overrides: INFINITE_SCROLL_IGNITION_OVERRIDES,
            ..infinite_scroll(
                INFINITE_SCROLL_IGNITION,
                "Measures V8 GC metrics using Ignition.",
                "InfiniteScrollPageSet",
            )
        },
        BenchmarkDescriptor {
            decorators: ANDROID_ONLY,
            should_disable: ShouldDisable::ReferenceOnDevice(REFERENCE_BROKEN_DEVICE),
            ..infinite_scroll(
                MOBILE_INFINITE_SCROLL,
                "Measures V8 GC metrics and memory usage while scrolling the top mobile web pages.",
                "MobileInfiniteScrollPageSet",
            )
        },
        BenchmarkDescriptor {
            browser_overrides: IGNITION,
            ..mobile_code_size(
                MOBILE_CODE_SIZE_IGNITION,
                "Measures V8 heap and code size with Ignition enabled on mobile web pages.",
            )
        },
        mobile_code_size(MOBILE_CODE_SIZE, "Measures V8 heap and code size on mobile web pages."),
        BenchmarkDescriptor {
            should_disable: ShouldDisable::SvelteOrDevices(&["Nexus 5", "Nexus 7"]),
            tear_down_after_each_story: true,
            run_options: RunOptions {
                pageset_repeat: Some(3),
            },
            ..BenchmarkDescriptor::new(
                ADWORD,
                "Measures V8 execution metrics on the Adword page.",
                PageSet::Custom(ADWORD_STORY_SET),
                MeasurementKind::V8Execution,
            )
        },
    ]
}

/// Design document for the smoothness-based entries
pub fn documentation_url(name: &str) -> Option<&'static str> {
    match name {
        TOP_25_SMOOTH | KEY_MOBILE_SITES_SMOOTH | DETACHED_CONTEXT_AGE_IN_GC | INFINITE_SCROLL
        | MOBILE_INFINITE_SCROLL | MOBILE_CODE_SIZE_IGNITION | MOBILE_CODE_SIZE => Some(RENDERING_DOC),
        _ => None,
    }
}
