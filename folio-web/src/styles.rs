//! Layout rules for the page containers, emitted by the root component.

pub const LAYOUT_CSS: &str = r"
body {
    margin: 0;
    background-color: #121212;
    color: #fff;
    font-family: system-ui, sans-serif;
}

.title-bar {
    height: 10vh;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 2rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
}

.intro {
    height: 4rem;
    margin: 0;
    text-align: center;
    opacity: 0.8;
}

.page-content {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    display: none;
    justify-content: center;
    align-items: center;
    background-color: rgba(0, 0, 0, 0.9);
}

.page-content.hidden {
    display: none !important;
}

#homepage {
    position: static;
    height: calc(100vh - 10vh - 4rem);
    display: block;
    background-color: transparent;
}

#homepage .category-wrapper {
    height: 100%;
    display: flex;
    justify-content: space-around;
    align-items: center;
    user-select: none;
}

#homepage .category {
    width: 25vw;
    height: 25vw;
    max-width: 320px;
    max-height: 320px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.5rem;
    border-radius: 8px;
    cursor: pointer;
    transition: transform 0.2s ease;
}

#homepage .category:hover {
    transform: scale(1.05);
}

.page-content #backButton {
    position: absolute;
    text-align: center;
    top: 2.5rem;
    left: 20px;
    width: 36px;
    font-size: 36px;
    background-color: rgba(255, 255, 255, 0.9);
    border-radius: 5px;
    cursor: pointer;
    color: #fff;
    user-select: none;
}

.nav-arrow {
    position: absolute;
    top: 50%;
    transform: translateY(-50%);
    width: 60px;
    height: 60px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 24px;
    background-color: rgba(255, 255, 255, 0.1);
    border: 2px solid rgba(255, 255, 255, 0.3);
    border-radius: 50%;
    color: white;
    cursor: pointer;
    user-select: none;
    transition: all 0.3s ease;
    z-index: 100;
}

.nav-arrow:hover {
    background-color: rgba(255, 255, 255, 0.2);
    border-color: rgba(255, 255, 255, 0.6);
    transform: translateY(-50%) scale(1.1);
}

.nav-arrow-left {
    left: 30px;
}

.nav-arrow-right {
    right: 30px;
}

.audio-content,
.music-content,
.software-content {
    display: flex;
    margin: 1rem 1.5rem;
    flex-direction: column;
    height: calc(100% - 2rem);
    text-align: center;
    overflow-y: auto;
    width: calc(100% - 3rem);
    padding-left: 100px;
    padding-right: 100px;
}

.audio-content {
    padding-left: 1.5rem;
    padding-right: 100px;
}

.software-content {
    padding-left: 100px;
    padding-right: 1.5rem;
}

.content-header {
    margin-left: 3rem;
}

.filter-controls {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 0.5rem;
    padding: 0.75rem 0;
}

.filter-controls.sticky {
    position: sticky;
    top: 0;
    z-index: 10;
    background-color: rgba(0, 0, 0, 0.35);
    backdrop-filter: blur(6px);
}

.filter-btn {
    padding: 0.4rem 1rem;
    border: 1px solid rgba(255, 255, 255, 0.6);
    border-radius: 999px;
    background: transparent;
    color: #fff;
    cursor: pointer;
}

.filter-btn.active {
    background-color: #fff;
    color: #000;
}

.grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
    gap: 1.5rem;
    margin: 2rem 0;
}

.grid-item {
    display: flex;
    flex-direction: column;
    color: inherit;
    text-decoration: none;
}

.grid-item img {
    width: 100%;
    aspect-ratio: 1;
    object-fit: cover;
}

.item-info {
    display: flex;
    flex-direction: column;
    padding-top: 0.5rem;
}

.item-info .role {
    opacity: 0.75;
    font-size: 0.85rem;
}

@media (max-width: 700px) {
    #homepage {
        height: auto;
        min-height: calc(100vh - 10vh - 4rem);
    }

    #homepage .category-wrapper {
        height: auto;
        flex-direction: column;
        gap: 1.5rem;
        padding: 2rem 0;
    }

    #homepage .category {
        width: 70vw;
        height: 40vw;
    }

    .nav-arrow {
        width: 50px;
        height: 50px;
        font-size: 20px;
    }

    .nav-arrow-left {
        left: 15px;
    }

    .nav-arrow-right {
        right: 15px;
    }

    .audio-content,
    .music-content,
    .software-content {
        padding-left: 70px;
        padding-right: 70px;
    }

    .audio-content {
        padding-left: 1rem;
        padding-right: 70px;
    }

    .software-content {
        padding-left: 70px;
        padding-right: 1rem;
    }

    .software-content .grid {
        grid-template-columns: 1fr;
        max-width: 300px;
        margin: 2rem auto;
        gap: 1.5rem;
    }
}
";
